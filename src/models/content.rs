//! Interface contents: properties, telemetry, relationships, components and commands

use serde_json::Value;

use super::common::{ElementMetadata, OneOrMany, dispatch_tags, type_tag_or};
use super::schema::{Schema, decode_schema_field};
use crate::codec::wire::{
    expect_object, field, insert_opt, mismatch, optional_bool, optional_list, optional_object,
    optional_str, optional_u64, required_name, required_str,
};
use crate::codec::{DecodeResult, WireCodec, WireObject, impl_serde_via_codec};

/// Discriminant of a [`Content`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Property,
    Telemetry,
    Relationship,
    Component,
    Command,
    Raw,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Property => "Property",
            ContentKind::Telemetry => "Telemetry",
            ContentKind::Relationship => "Relationship",
            ContentKind::Component => "Component",
            ContentKind::Command => "Command",
            ContentKind::Raw => "Raw",
        }
    }
}

/// A named member of an [`Interface`](super::Interface)
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Property(Property),
    Telemetry(Telemetry),
    Relationship(Relationship),
    Component(Component),
    Command(Command),
    /// Entry whose `@type` is missing or not a known content kind
    Raw(WireObject),
}

impl Content {
    pub fn kind(&self) -> ContentKind {
        match self {
            Content::Property(_) => ContentKind::Property,
            Content::Telemetry(_) => ContentKind::Telemetry,
            Content::Relationship(_) => ContentKind::Relationship,
            Content::Component(_) => ContentKind::Component,
            Content::Command(_) => ContentKind::Command,
            Content::Raw(_) => ContentKind::Raw,
        }
    }

    /// Content name; for raw entries, the `name` key if it is a string
    pub fn name(&self) -> Option<&str> {
        match self {
            Content::Property(p) => Some(&p.name),
            Content::Telemetry(t) => Some(&t.name),
            Content::Relationship(r) => Some(&r.name),
            Content::Component(c) => Some(&c.name),
            Content::Command(c) => Some(&c.name),
            Content::Raw(obj) => obj.get("name").and_then(Value::as_str),
        }
    }

    pub fn metadata(&self) -> Option<&ElementMetadata> {
        match self {
            Content::Property(p) => Some(&p.metadata),
            Content::Telemetry(t) => Some(&t.metadata),
            Content::Relationship(r) => Some(&r.metadata),
            Content::Component(c) => Some(&c.metadata),
            Content::Command(c) => Some(&c.metadata),
            Content::Raw(_) => None,
        }
    }

    /// The schema of a property or telemetry
    pub fn schema(&self) -> Option<&Schema> {
        match self {
            Content::Property(p) => Some(&p.schema),
            Content::Telemetry(t) => Some(&t.schema),
            _ => None,
        }
    }
}

impl WireCodec for Content {
    fn decode(value: &Value) -> DecodeResult<Self> {
        let obj = expect_object(value, "Content")?;
        let Some(tags) = dispatch_tags(obj) else {
            return Ok(Content::Raw(obj.clone()));
        };
        if tags.contains("Property") {
            Property::decode_object(obj, tags).map(Content::Property)
        } else if tags.contains("Telemetry") {
            Telemetry::decode_object(obj, tags).map(Content::Telemetry)
        } else if tags.contains("Relationship") {
            Relationship::decode_object(obj, tags).map(Content::Relationship)
        } else if tags.contains("Component") {
            Component::decode_object(obj, tags).map(Content::Component)
        } else if tags.contains("Command") {
            Command::decode_object(obj, tags).map(Content::Command)
        } else {
            Ok(Content::Raw(obj.clone()))
        }
    }

    fn encode(&self) -> Value {
        match self {
            Content::Property(p) => p.encode(),
            Content::Telemetry(t) => t.encode(),
            Content::Relationship(r) => r.encode(),
            Content::Component(c) => c.encode(),
            Content::Command(c) => c.encode(),
            Content::Raw(obj) => Value::Object(obj.clone()),
        }
    }
}

impl From<Property> for Content {
    fn from(p: Property) -> Self {
        Content::Property(p)
    }
}

impl From<Telemetry> for Content {
    fn from(t: Telemetry) -> Self {
        Content::Telemetry(t)
    }
}

impl From<Relationship> for Content {
    fn from(r: Relationship) -> Self {
        Content::Relationship(r)
    }
}

impl From<Component> for Content {
    fn from(c: Component) -> Self {
        Content::Component(c)
    }
}

impl From<Command> for Content {
    fn from(c: Command) -> Self {
        Content::Command(c)
    }
}

/// Start a content object with `@id`, `@type` and `name`, in that order
fn content_head(metadata: &ElementMetadata, type_tag: &OneOrMany, name: &str) -> WireObject {
    let mut obj = WireObject::new();
    metadata.encode_id(&mut obj);
    obj.insert("@type".to_string(), type_tag.to_value());
    obj.insert("name".to_string(), Value::String(name.to_string()));
    obj
}

/// `@type: "Property"`
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub schema: Schema,
    pub type_tag: OneOrMany,
    pub writable: Option<bool>,
    /// Semantic unit, when the property carries a semantic type adornment
    pub unit: Option<String>,
    /// Overriding extension: the property this one overrides
    pub overrides: Option<String>,
    /// Annotation extension: the property this one annotates
    pub annotates: Option<String>,
    pub metadata: ElementMetadata,
}

impl Property {
    pub fn new(name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
            type_tag: "Property".into(),
            writable: None,
            unit: None,
            overrides: None,
            annotates: None,
            metadata: ElementMetadata::default(),
        }
    }

    fn decode_object(obj: &WireObject, type_tag: OneOrMany) -> DecodeResult<Self> {
        const ENTITY: &str = "Property";
        Ok(Self {
            name: required_name(obj, ENTITY)?,
            schema: decode_schema_field(obj, "schema", ENTITY)?,
            type_tag,
            writable: optional_bool(obj, "writable", ENTITY)?,
            unit: optional_str(obj, "unit", ENTITY)?,
            overrides: optional_str(obj, "overrides", ENTITY)?,
            annotates: optional_str(obj, "annotates", ENTITY)?,
            metadata: ElementMetadata::decode(obj, ENTITY)?,
        })
    }
}

impl WireCodec for Property {
    /// Decode a property; an absent `@type` defaults to `"Property"`
    ///
    /// This is the path used for the nested properties of a relationship,
    /// which often omit `@type`.
    fn decode(value: &Value) -> DecodeResult<Self> {
        let obj = expect_object(value, "Property")?;
        Self::decode_object(obj, type_tag_or(obj, "Property", "Property")?)
    }

    fn encode(&self) -> Value {
        let mut obj = content_head(&self.metadata, &self.type_tag, &self.name);
        obj.insert("schema".to_string(), self.schema.encode());
        insert_opt(&mut obj, "writable", self.writable);
        insert_opt(&mut obj, "unit", self.unit.clone());
        insert_opt(&mut obj, "overrides", self.overrides.clone());
        insert_opt(&mut obj, "annotates", self.annotates.clone());
        self.metadata.encode_descriptive(&mut obj);
        Value::Object(obj)
    }
}

/// `@type: "Telemetry"`
#[derive(Debug, Clone, PartialEq)]
pub struct Telemetry {
    pub name: String,
    pub schema: Schema,
    pub type_tag: OneOrMany,
    pub unit: Option<String>,
    pub metadata: ElementMetadata,
}

impl Telemetry {
    pub fn new(name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
            type_tag: "Telemetry".into(),
            unit: None,
            metadata: ElementMetadata::default(),
        }
    }

    fn decode_object(obj: &WireObject, type_tag: OneOrMany) -> DecodeResult<Self> {
        const ENTITY: &str = "Telemetry";
        Ok(Self {
            name: required_name(obj, ENTITY)?,
            schema: decode_schema_field(obj, "schema", ENTITY)?,
            type_tag,
            unit: optional_str(obj, "unit", ENTITY)?,
            metadata: ElementMetadata::decode(obj, ENTITY)?,
        })
    }
}

impl WireCodec for Telemetry {
    fn decode(value: &Value) -> DecodeResult<Self> {
        let obj = expect_object(value, "Telemetry")?;
        Self::decode_object(obj, type_tag_or(obj, "Telemetry", "Telemetry")?)
    }

    fn encode(&self) -> Value {
        let mut obj = content_head(&self.metadata, &self.type_tag, &self.name);
        obj.insert("schema".to_string(), self.schema.encode());
        insert_opt(&mut obj, "unit", self.unit.clone());
        self.metadata.encode_descriptive(&mut obj);
        Value::Object(obj)
    }
}

/// `@type: "Relationship"`
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    pub name: String,
    /// DTMI of the target interface
    pub target: String,
    pub type_tag: OneOrMany,
    /// Properties carried by each relationship instance, in declaration order
    pub properties: Vec<Property>,
    pub min_multiplicity: Option<u64>,
    pub max_multiplicity: Option<u64>,
    pub writable: Option<bool>,
    pub metadata: ElementMetadata,
}

impl Relationship {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            type_tag: "Relationship".into(),
            properties: Vec::new(),
            min_multiplicity: None,
            max_multiplicity: None,
            writable: None,
            metadata: ElementMetadata::default(),
        }
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    fn decode_object(obj: &WireObject, type_tag: OneOrMany) -> DecodeResult<Self> {
        const ENTITY: &str = "Relationship";
        Ok(Self {
            name: required_name(obj, ENTITY)?,
            target: required_str(obj, "target", ENTITY)?,
            type_tag,
            properties: optional_list(obj, "properties", ENTITY, Property::decode)?
                .unwrap_or_default(),
            min_multiplicity: optional_u64(obj, "minMultiplicity", ENTITY)?,
            max_multiplicity: optional_u64(obj, "maxMultiplicity", ENTITY)?,
            writable: optional_bool(obj, "writable", ENTITY)?,
            metadata: ElementMetadata::decode(obj, ENTITY)?,
        })
    }
}

impl WireCodec for Relationship {
    fn decode(value: &Value) -> DecodeResult<Self> {
        let obj = expect_object(value, "Relationship")?;
        Self::decode_object(obj, type_tag_or(obj, "Relationship", "Relationship")?)
    }

    fn encode(&self) -> Value {
        let mut obj = content_head(&self.metadata, &self.type_tag, &self.name);
        obj.insert("target".to_string(), Value::String(self.target.clone()));
        obj.insert(
            "properties".to_string(),
            Value::Array(self.properties.iter().map(Property::encode).collect()),
        );
        insert_opt(&mut obj, "minMultiplicity", self.min_multiplicity);
        insert_opt(&mut obj, "maxMultiplicity", self.max_multiplicity);
        insert_opt(&mut obj, "writable", self.writable);
        self.metadata.encode_descriptive(&mut obj);
        Value::Object(obj)
    }
}

/// `@type: "Component"`
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub name: String,
    /// DTMI of the interface this component instantiates
    pub schema: String,
    pub type_tag: OneOrMany,
    pub metadata: ElementMetadata,
}

impl Component {
    pub fn new(name: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
            type_tag: "Component".into(),
            metadata: ElementMetadata::default(),
        }
    }

    fn decode_object(obj: &WireObject, type_tag: OneOrMany) -> DecodeResult<Self> {
        const ENTITY: &str = "Component";
        let schema = match field(obj, "schema") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => return Err(mismatch(ENTITY, "schema", "interface identifier", other)),
            None => required_str(obj, "schema", ENTITY)?,
        };
        Ok(Self {
            name: required_name(obj, ENTITY)?,
            schema,
            type_tag,
            metadata: ElementMetadata::decode(obj, ENTITY)?,
        })
    }
}

impl WireCodec for Component {
    fn decode(value: &Value) -> DecodeResult<Self> {
        let obj = expect_object(value, "Component")?;
        Self::decode_object(obj, type_tag_or(obj, "Component", "Component")?)
    }

    fn encode(&self) -> Value {
        let mut obj = content_head(&self.metadata, &self.type_tag, &self.name);
        obj.insert("schema".to_string(), Value::String(self.schema.clone()));
        self.metadata.encode_descriptive(&mut obj);
        Value::Object(obj)
    }
}

/// `@type: "Command"`
///
/// Request and response payloads are kept as raw dictionaries.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub name: String,
    pub type_tag: OneOrMany,
    pub request: Option<WireObject>,
    pub response: Option<WireObject>,
    pub metadata: ElementMetadata,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_tag: "Command".into(),
            request: None,
            response: None,
            metadata: ElementMetadata::default(),
        }
    }

    fn decode_object(obj: &WireObject, type_tag: OneOrMany) -> DecodeResult<Self> {
        const ENTITY: &str = "Command";
        Ok(Self {
            name: required_name(obj, ENTITY)?,
            type_tag,
            request: optional_object(obj, "request", ENTITY)?,
            response: optional_object(obj, "response", ENTITY)?,
            metadata: ElementMetadata::decode(obj, ENTITY)?,
        })
    }
}

impl WireCodec for Command {
    fn decode(value: &Value) -> DecodeResult<Self> {
        let obj = expect_object(value, "Command")?;
        Self::decode_object(obj, type_tag_or(obj, "Command", "Command")?)
    }

    fn encode(&self) -> Value {
        let mut obj = content_head(&self.metadata, &self.type_tag, &self.name);
        insert_opt(&mut obj, "request", self.request.clone());
        insert_opt(&mut obj, "response", self.response.clone());
        self.metadata.encode_descriptive(&mut obj);
        Value::Object(obj)
    }
}

impl_serde_via_codec!(Content, Property, Telemetry, Relationship, Component, Command);
