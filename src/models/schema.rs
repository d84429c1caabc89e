//! DTDL schema model
//!
//! A [`Schema`] is either a primitive name, an opaque reference string, one of
//! the four complex kinds (Enum, Map, Object, Array) or a raw dictionary kept
//! verbatim when its `@type` is missing or unknown.
//!
//! Complex schemas keep the `@type` exactly as it was decoded, so a schema
//! declared as `["Object", "Extension"]` is dispatched as an Object but
//! re-encoded with both tags.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

use super::common::{ElementMetadata, OneOrMany, dispatch_tags, type_tag_or};
use crate::codec::wire::{
    expect_object, field, json_type_name, mismatch, optional_list, required, required_name,
};
use crate::codec::{DecodeError, DecodeResult, WireCodec, WireObject, impl_serde_via_codec};

/// The closed set of DTDL primitive schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveSchema {
    Boolean,
    Date,
    DateTime,
    Double,
    Duration,
    Float,
    Integer,
    Long,
    String,
    Time,
}

impl PrimitiveSchema {
    pub const ALL: [PrimitiveSchema; 10] = [
        PrimitiveSchema::Boolean,
        PrimitiveSchema::Date,
        PrimitiveSchema::DateTime,
        PrimitiveSchema::Double,
        PrimitiveSchema::Duration,
        PrimitiveSchema::Float,
        PrimitiveSchema::Integer,
        PrimitiveSchema::Long,
        PrimitiveSchema::String,
        PrimitiveSchema::Time,
    ];

    /// Wire spelling, e.g. `"dateTime"`
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveSchema::Boolean => "boolean",
            PrimitiveSchema::Date => "date",
            PrimitiveSchema::DateTime => "dateTime",
            PrimitiveSchema::Double => "double",
            PrimitiveSchema::Duration => "duration",
            PrimitiveSchema::Float => "float",
            PrimitiveSchema::Integer => "integer",
            PrimitiveSchema::Long => "long",
            PrimitiveSchema::String => "string",
            PrimitiveSchema::Time => "time",
        }
    }
}

/// Returned when a string is not one of the DTDL primitive names
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown primitive schema '{0}'")]
pub struct UnknownPrimitiveSchema(pub String);

impl FromStr for PrimitiveSchema {
    type Err = UnknownPrimitiveSchema;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveSchema::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPrimitiveSchema(s.to_string()))
    }
}

impl fmt::Display for PrimitiveSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DTDL schema
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// One of the ten primitive names
    Primitive(PrimitiveSchema),
    /// Any other string, typically the DTMI of a schema defined elsewhere
    ///
    /// Never holds a primitive name; build it with [`Schema::reference`].
    Reference(String),
    Enum(EnumSchema),
    Map(MapSchema),
    Object(ObjectSchema),
    Array(ArraySchema),
    /// An object whose `@type` is missing or not a known schema kind
    ///
    /// Never holds an Enum, Map, Object or Array; build it with [`Schema::raw`].
    Raw(WireObject),
}

const SCHEMA_KINDS: [&str; 4] = ["Enum", "Map", "Object", "Array"];

fn has_schema_kind(obj: &WireObject) -> bool {
    dispatch_tags(obj).is_some_and(|tags| SCHEMA_KINDS.iter().any(|kind| tags.contains(kind)))
}

impl Schema {
    /// Schema named by a string: a primitive when the name is one, a reference otherwise
    ///
    /// ```rust
    /// use dtdl_sdk::models::{PrimitiveSchema, Schema};
    ///
    /// assert_eq!(Schema::reference("integer"), Schema::Primitive(PrimitiveSchema::Integer));
    /// assert!(matches!(Schema::reference("dtmi:com:example:Point;1"), Schema::Reference(_)));
    /// ```
    pub fn reference(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.parse::<PrimitiveSchema>() {
            Ok(primitive) => Schema::Primitive(primitive),
            Err(_) => Schema::Reference(name),
        }
    }

    /// Keep a dictionary verbatim
    ///
    /// The dictionary must not be typed as one of the four complex kinds, which
    /// would decode as that kind instead.
    pub fn raw(obj: WireObject) -> Self {
        debug_assert!(!has_schema_kind(&obj), "raw schema carries a known kind");
        Schema::Raw(obj)
    }

    /// Whether this value encodes and decodes back to itself
    ///
    /// False only for a `Reference` holding a primitive name or a `Raw`
    /// typed as a known kind, both of which the public constructors avoid.
    pub fn is_canonical(&self) -> bool {
        match self {
            Schema::Reference(name) => name.parse::<PrimitiveSchema>().is_err(),
            Schema::Raw(obj) => !has_schema_kind(obj),
            _ => true,
        }
    }

    /// Short name of the variant, for logs and listings
    pub fn kind_name(&self) -> &'static str {
        match self {
            Schema::Primitive(_) => "Primitive",
            Schema::Reference(_) => "Reference",
            Schema::Enum(_) => "Enum",
            Schema::Map(_) => "Map",
            Schema::Object(_) => "Object",
            Schema::Array(_) => "Array",
            Schema::Raw(_) => "Raw",
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(
            self,
            Schema::Enum(_) | Schema::Map(_) | Schema::Object(_) | Schema::Array(_)
        )
    }

    pub fn as_primitive(&self) -> Option<PrimitiveSchema> {
        match self {
            Schema::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    /// Schemas directly nested inside this one
    pub fn children(&self) -> Vec<&Schema> {
        match self {
            Schema::Map(map) => vec![map.map_value.schema.as_ref()],
            Schema::Object(object) => object.fields.iter().map(|f| &f.schema).collect(),
            Schema::Array(array) => vec![array.element_schema.as_ref()],
            _ => Vec::new(),
        }
    }
}

impl WireCodec for Schema {
    fn decode(value: &Value) -> DecodeResult<Self> {
        match value {
            Value::String(name) => Ok(Schema::reference(name.as_str())),
            Value::Object(obj) => {
                let Some(tags) = dispatch_tags(obj) else {
                    return Ok(Schema::Raw(obj.clone()));
                };
                if tags.contains("Enum") {
                    EnumSchema::decode_object(obj, tags).map(Schema::Enum)
                } else if tags.contains("Map") {
                    MapSchema::decode_object(obj, tags).map(Schema::Map)
                } else if tags.contains("Object") {
                    ObjectSchema::decode_object(obj, tags).map(Schema::Object)
                } else if tags.contains("Array") {
                    ArraySchema::decode_object(obj, tags).map(Schema::Array)
                } else {
                    Ok(Schema::Raw(obj.clone()))
                }
            }
            other => Err(DecodeError::NotAnObject {
                entity: "Schema",
                found: json_type_name(other),
            }),
        }
    }

    fn encode(&self) -> Value {
        match self {
            Schema::Primitive(p) => Value::String(p.as_str().to_string()),
            Schema::Reference(reference) => Value::String(reference.clone()),
            Schema::Enum(schema) => schema.encode(),
            Schema::Map(schema) => schema.encode(),
            Schema::Object(schema) => schema.encode(),
            Schema::Array(schema) => schema.encode(),
            Schema::Raw(obj) => Value::Object(obj.clone()),
        }
    }
}

impl From<PrimitiveSchema> for Schema {
    fn from(p: PrimitiveSchema) -> Self {
        Schema::Primitive(p)
    }
}

impl From<&str> for Schema {
    fn from(name: &str) -> Self {
        Schema::reference(name)
    }
}

impl From<String> for Schema {
    fn from(name: String) -> Self {
        Schema::reference(name)
    }
}

impl From<EnumSchema> for Schema {
    fn from(schema: EnumSchema) -> Self {
        Schema::Enum(schema)
    }
}

impl From<MapSchema> for Schema {
    fn from(schema: MapSchema) -> Self {
        Schema::Map(schema)
    }
}

impl From<ObjectSchema> for Schema {
    fn from(schema: ObjectSchema) -> Self {
        Schema::Object(schema)
    }
}

impl From<ArraySchema> for Schema {
    fn from(schema: ArraySchema) -> Self {
        Schema::Array(schema)
    }
}

/// Decode the schema held under `key` of `obj`, reporting errors against `key`
pub(crate) fn decode_schema_field(
    obj: &WireObject,
    key: &str,
    entity: &'static str,
) -> DecodeResult<Schema> {
    let value = required(obj, key, entity)?;
    if !(value.is_string() || value.is_object()) {
        return Err(mismatch(entity, key, "string or object", value));
    }
    Schema::decode(value).map_err(|e| e.within(key))
}

/// Value type of an enum's literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumValueSchema {
    Integer,
    String,
}

impl EnumValueSchema {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnumValueSchema::Integer => "integer",
            EnumValueSchema::String => "string",
        }
    }
}

/// The `enumValue` of a single enum entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EnumLiteral {
    Integer(i64),
    String(String),
}

impl EnumLiteral {
    /// Whether this literal is allowed under `schema`
    pub fn matches(&self, schema: EnumValueSchema) -> bool {
        matches!(
            (self, schema),
            (EnumLiteral::Integer(_), EnumValueSchema::Integer)
                | (EnumLiteral::String(_), EnumValueSchema::String)
        )
    }

    fn to_value(&self) -> Value {
        match self {
            EnumLiteral::Integer(n) => Value::from(*n),
            EnumLiteral::String(s) => Value::String(s.clone()),
        }
    }
}

impl From<i64> for EnumLiteral {
    fn from(n: i64) -> Self {
        EnumLiteral::Integer(n)
    }
}

impl From<&str> for EnumLiteral {
    fn from(s: &str) -> Self {
        EnumLiteral::String(s.to_string())
    }
}

impl From<String> for EnumLiteral {
    fn from(s: String) -> Self {
        EnumLiteral::String(s)
    }
}

/// One entry of an [`EnumSchema`]
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub enum_value: EnumLiteral,
    pub metadata: ElementMetadata,
}

impl EnumValue {
    pub fn new(name: impl Into<String>, enum_value: impl Into<EnumLiteral>) -> Self {
        Self {
            name: name.into(),
            enum_value: enum_value.into(),
            metadata: ElementMetadata::default(),
        }
    }

    /// Decode an entry, checking its literal against the enclosing `valueSchema`
    pub fn decode_with(value: &Value, value_schema: EnumValueSchema) -> DecodeResult<Self> {
        const ENTITY: &str = "EnumValue";
        let obj = expect_object(value, ENTITY)?;
        let raw = required(obj, "enumValue", ENTITY)?;
        let enum_value = match value_schema {
            EnumValueSchema::Integer => raw
                .as_i64()
                .map(EnumLiteral::Integer)
                .ok_or_else(|| mismatch(ENTITY, "enumValue", "integer", raw))?,
            EnumValueSchema::String => raw
                .as_str()
                .map(EnumLiteral::from)
                .ok_or_else(|| mismatch(ENTITY, "enumValue", "string", raw))?,
        };
        Ok(Self {
            name: required_name(obj, ENTITY)?,
            enum_value,
            metadata: ElementMetadata::decode(obj, ENTITY)?,
        })
    }

    pub fn encode(&self) -> Value {
        let mut obj = WireObject::new();
        self.metadata.encode_id(&mut obj);
        obj.insert("name".to_string(), Value::String(self.name.clone()));
        obj.insert("enumValue".to_string(), self.enum_value.to_value());
        self.metadata.encode_descriptive(&mut obj);
        Value::Object(obj)
    }
}

/// `@type: "Enum"`
#[derive(Debug, Clone, PartialEq)]
pub struct EnumSchema {
    pub type_tag: OneOrMany,
    pub value_schema: EnumValueSchema,
    pub enum_values: Vec<EnumValue>,
    pub metadata: ElementMetadata,
}

impl EnumSchema {
    pub fn new(value_schema: EnumValueSchema, enum_values: Vec<EnumValue>) -> Self {
        let schema = Self {
            type_tag: "Enum".into(),
            value_schema,
            enum_values,
            metadata: ElementMetadata::default(),
        };
        debug_assert!(schema.is_consistent(), "enum literal does not match valueSchema");
        schema
    }

    /// Every literal matches `value_schema`
    pub fn is_consistent(&self) -> bool {
        self.enum_values
            .iter()
            .all(|v| v.enum_value.matches(self.value_schema))
    }

    fn decode_object(obj: &WireObject, type_tag: OneOrMany) -> DecodeResult<Self> {
        const ENTITY: &str = "EnumSchema";
        // An omitted valueSchema is read as "string"
        let value_schema = match field(obj, "valueSchema") {
            None => EnumValueSchema::String,
            Some(Value::String(s)) if s == "integer" => EnumValueSchema::Integer,
            Some(Value::String(s)) if s == "string" => EnumValueSchema::String,
            Some(Value::String(s)) => {
                return Err(DecodeError::InvalidValue {
                    entity: ENTITY,
                    field: "valueSchema".to_string(),
                    reason: format!("expected \"integer\" or \"string\", got \"{}\"", s),
                });
            }
            Some(other) => return Err(mismatch(ENTITY, "valueSchema", "string", other)),
        };
        let enum_values = optional_list(obj, "enumValues", ENTITY, |v| {
            EnumValue::decode_with(v, value_schema)
        })?
        .unwrap_or_default();
        Ok(Self {
            type_tag,
            value_schema,
            enum_values,
            metadata: ElementMetadata::decode(obj, ENTITY)?,
        })
    }
}

impl WireCodec for EnumSchema {
    fn decode(value: &Value) -> DecodeResult<Self> {
        let obj = expect_object(value, "EnumSchema")?;
        Self::decode_object(obj, type_tag_or(obj, "EnumSchema", "Enum")?)
    }

    fn encode(&self) -> Value {
        let mut obj = WireObject::new();
        self.metadata.encode_id(&mut obj);
        obj.insert("@type".to_string(), self.type_tag.to_value());
        obj.insert(
            "valueSchema".to_string(),
            Value::String(self.value_schema.as_str().to_string()),
        );
        obj.insert(
            "enumValues".to_string(),
            Value::Array(self.enum_values.iter().map(EnumValue::encode).collect()),
        );
        self.metadata.encode_descriptive(&mut obj);
        Value::Object(obj)
    }
}

/// Key descriptor of a [`MapSchema`]; its schema is always `"string"`
#[derive(Debug, Clone, PartialEq)]
pub struct MapKey {
    pub name: String,
    pub metadata: ElementMetadata,
}

impl MapKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: ElementMetadata::default(),
        }
    }
}

impl WireCodec for MapKey {
    fn decode(value: &Value) -> DecodeResult<Self> {
        const ENTITY: &str = "MapKey";
        let obj = expect_object(value, ENTITY)?;
        match field(obj, "schema") {
            None => {}
            Some(Value::String(s)) if s == "string" => {}
            Some(Value::String(s)) => {
                return Err(DecodeError::InvalidValue {
                    entity: ENTITY,
                    field: "schema".to_string(),
                    reason: format!("map keys must use the \"string\" schema, got \"{}\"", s),
                });
            }
            Some(other) => return Err(mismatch(ENTITY, "schema", "string", other)),
        }
        Ok(Self {
            name: required_name(obj, ENTITY)?,
            metadata: ElementMetadata::decode(obj, ENTITY)?,
        })
    }

    fn encode(&self) -> Value {
        let mut obj = WireObject::new();
        self.metadata.encode_id(&mut obj);
        obj.insert("name".to_string(), Value::String(self.name.clone()));
        obj.insert("schema".to_string(), Value::String("string".to_string()));
        self.metadata.encode_descriptive(&mut obj);
        Value::Object(obj)
    }
}

/// Value descriptor of a [`MapSchema`]
#[derive(Debug, Clone, PartialEq)]
pub struct MapValue {
    pub name: String,
    pub schema: Box<Schema>,
    pub metadata: ElementMetadata,
}

impl MapValue {
    pub fn new(name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        Self {
            name: name.into(),
            schema: Box::new(schema.into()),
            metadata: ElementMetadata::default(),
        }
    }
}

impl WireCodec for MapValue {
    fn decode(value: &Value) -> DecodeResult<Self> {
        const ENTITY: &str = "MapValue";
        let obj = expect_object(value, ENTITY)?;
        Ok(Self {
            name: required_name(obj, ENTITY)?,
            schema: Box::new(decode_schema_field(obj, "schema", ENTITY)?),
            metadata: ElementMetadata::decode(obj, ENTITY)?,
        })
    }

    fn encode(&self) -> Value {
        let mut obj = WireObject::new();
        self.metadata.encode_id(&mut obj);
        obj.insert("name".to_string(), Value::String(self.name.clone()));
        obj.insert("schema".to_string(), self.schema.encode());
        self.metadata.encode_descriptive(&mut obj);
        Value::Object(obj)
    }
}

/// `@type: "Map"`
#[derive(Debug, Clone, PartialEq)]
pub struct MapSchema {
    pub type_tag: OneOrMany,
    pub map_key: MapKey,
    pub map_value: MapValue,
    pub metadata: ElementMetadata,
}

impl MapSchema {
    pub fn new(
        key_name: impl Into<String>,
        value_name: impl Into<String>,
        value_schema: impl Into<Schema>,
    ) -> Self {
        Self {
            type_tag: "Map".into(),
            map_key: MapKey::new(key_name),
            map_value: MapValue::new(value_name, value_schema),
            metadata: ElementMetadata::default(),
        }
    }

    fn decode_object(obj: &WireObject, type_tag: OneOrMany) -> DecodeResult<Self> {
        const ENTITY: &str = "MapSchema";
        let map_key = MapKey::decode(required(obj, "mapKey", ENTITY)?)
            .map_err(|e| e.within("mapKey"))?;
        let map_value = MapValue::decode(required(obj, "mapValue", ENTITY)?)
            .map_err(|e| e.within("mapValue"))?;
        Ok(Self {
            type_tag,
            map_key,
            map_value,
            metadata: ElementMetadata::decode(obj, ENTITY)?,
        })
    }
}

impl WireCodec for MapSchema {
    fn decode(value: &Value) -> DecodeResult<Self> {
        let obj = expect_object(value, "MapSchema")?;
        Self::decode_object(obj, type_tag_or(obj, "MapSchema", "Map")?)
    }

    fn encode(&self) -> Value {
        let mut obj = WireObject::new();
        self.metadata.encode_id(&mut obj);
        obj.insert("@type".to_string(), self.type_tag.to_value());
        obj.insert("mapKey".to_string(), self.map_key.encode());
        obj.insert("mapValue".to_string(), self.map_value.encode());
        self.metadata.encode_descriptive(&mut obj);
        Value::Object(obj)
    }
}

/// One field of an [`ObjectSchema`]
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectField {
    pub name: String,
    pub schema: Schema,
    /// Optional `@type`, used for semantic adornments
    pub type_tag: Option<OneOrMany>,
    pub metadata: ElementMetadata,
}

impl ObjectField {
    pub fn new(name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
            type_tag: None,
            metadata: ElementMetadata::default(),
        }
    }
}

impl WireCodec for ObjectField {
    fn decode(value: &Value) -> DecodeResult<Self> {
        const ENTITY: &str = "ObjectField";
        let obj = expect_object(value, ENTITY)?;
        Ok(Self {
            name: required_name(obj, ENTITY)?,
            schema: decode_schema_field(obj, "schema", ENTITY)?,
            type_tag: OneOrMany::decode_field(obj, "@type", ENTITY)?,
            metadata: ElementMetadata::decode(obj, ENTITY)?,
        })
    }

    fn encode(&self) -> Value {
        let mut obj = WireObject::new();
        self.metadata.encode_id(&mut obj);
        if let Some(tag) = &self.type_tag {
            obj.insert("@type".to_string(), tag.to_value());
        }
        obj.insert("name".to_string(), Value::String(self.name.clone()));
        obj.insert("schema".to_string(), self.schema.encode());
        self.metadata.encode_descriptive(&mut obj);
        Value::Object(obj)
    }
}

/// `@type: "Object"`
///
/// Field names are not checked for uniqueness here; see
/// [`crate::validation::NameValidator`].
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSchema {
    pub type_tag: OneOrMany,
    pub fields: Vec<ObjectField>,
    pub metadata: ElementMetadata,
}

impl ObjectSchema {
    pub fn new(fields: Vec<ObjectField>) -> Self {
        Self {
            type_tag: "Object".into(),
            fields,
            metadata: ElementMetadata::default(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&ObjectField> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn decode_object(obj: &WireObject, type_tag: OneOrMany) -> DecodeResult<Self> {
        const ENTITY: &str = "ObjectSchema";
        Ok(Self {
            type_tag,
            fields: optional_list(obj, "fields", ENTITY, ObjectField::decode)?.unwrap_or_default(),
            metadata: ElementMetadata::decode(obj, ENTITY)?,
        })
    }
}

impl WireCodec for ObjectSchema {
    fn decode(value: &Value) -> DecodeResult<Self> {
        let obj = expect_object(value, "ObjectSchema")?;
        Self::decode_object(obj, type_tag_or(obj, "ObjectSchema", "Object")?)
    }

    fn encode(&self) -> Value {
        let mut obj = WireObject::new();
        self.metadata.encode_id(&mut obj);
        obj.insert("@type".to_string(), self.type_tag.to_value());
        obj.insert(
            "fields".to_string(),
            Value::Array(self.fields.iter().map(ObjectField::encode).collect()),
        );
        self.metadata.encode_descriptive(&mut obj);
        Value::Object(obj)
    }
}

/// `@type: "Array"`
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySchema {
    pub type_tag: OneOrMany,
    pub element_schema: Box<Schema>,
    pub metadata: ElementMetadata,
}

impl ArraySchema {
    pub fn new(element_schema: impl Into<Schema>) -> Self {
        Self {
            type_tag: "Array".into(),
            element_schema: Box::new(element_schema.into()),
            metadata: ElementMetadata::default(),
        }
    }

    fn decode_object(obj: &WireObject, type_tag: OneOrMany) -> DecodeResult<Self> {
        const ENTITY: &str = "ArraySchema";
        Ok(Self {
            type_tag,
            element_schema: Box::new(decode_schema_field(obj, "elementSchema", ENTITY)?),
            metadata: ElementMetadata::decode(obj, ENTITY)?,
        })
    }
}

impl WireCodec for ArraySchema {
    fn decode(value: &Value) -> DecodeResult<Self> {
        let obj = expect_object(value, "ArraySchema")?;
        Self::decode_object(obj, type_tag_or(obj, "ArraySchema", "Array")?)
    }

    fn encode(&self) -> Value {
        let mut obj = WireObject::new();
        self.metadata.encode_id(&mut obj);
        obj.insert("@type".to_string(), self.type_tag.to_value());
        obj.insert("elementSchema".to_string(), self.element_schema.encode());
        self.metadata.encode_descriptive(&mut obj);
        Value::Object(obj)
    }
}

impl_serde_via_codec!(Schema, EnumSchema, MapSchema, ObjectSchema, ArraySchema);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitive_names_parse() {
        for primitive in PrimitiveSchema::ALL {
            assert_eq!(primitive.as_str().parse::<PrimitiveSchema>(), Ok(primitive));
        }
        assert!("uuid".parse::<PrimitiveSchema>().is_err());
    }

    #[test]
    fn test_unknown_string_is_reference() {
        let schema = Schema::decode(&json!("dtmi:com:example:Coordinates;1")).unwrap();
        assert_eq!(
            schema,
            Schema::Reference("dtmi:com:example:Coordinates;1".to_string())
        );
        assert_eq!(schema.encode(), json!("dtmi:com:example:Coordinates;1"));
    }

    #[test]
    fn test_non_string_non_object_is_rejected() {
        assert!(Schema::decode(&json!(7)).is_err());
        assert!(Schema::decode(&json!(["integer"])).is_err());
    }

    #[test]
    fn test_children_of_nested_schemas() {
        let object = ObjectSchema::new(vec![
            ObjectField::new("lat", PrimitiveSchema::Double),
            ObjectField::new("tags", ArraySchema::new(PrimitiveSchema::String)),
        ]);
        let schema = Schema::from(object);
        assert_eq!(schema.children().len(), 2);
        assert!(schema.is_complex());
        assert_eq!(schema.children()[1].kind_name(), "Array");
    }

    #[test]
    fn test_enum_literal_matches_value_schema() {
        assert!(EnumLiteral::Integer(1).matches(EnumValueSchema::Integer));
        assert!(!EnumLiteral::Integer(1).matches(EnumValueSchema::String));
        assert!(EnumLiteral::from("on").matches(EnumValueSchema::String));
    }
}
