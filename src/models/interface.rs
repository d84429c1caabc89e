//! DTDL Interface, the root of a model document

use serde_json::Value;

use super::common::{LocalizableString, OneOrMany, dispatch_tags};
use super::content::Content;
use crate::codec::wire::{expect_object, field, insert_opt, mismatch, optional_str, required_str};
use crate::codec::{DecodeError, DecodeResult, WireCodec, WireObject, impl_serde_via_codec};

/// Context URI of DTDL v3
pub const DTDL_V3_CONTEXT: &str = "dtmi:dtdl:context;3";
/// Context URI of DTDL v4
pub const DTDL_V4_CONTEXT: &str = "dtmi:dtdl:context;4";

/// Name and `@type` of a content entry, read without decoding the entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSummary {
    pub name: Option<String>,
    pub type_tag: Option<OneOrMany>,
}

/// A DTDL Interface (v3 and v4)
///
/// `contents` are held as raw dictionaries; decoding an entry into a typed
/// [`Content`] is a separate step (see [`Interface::decode_contents`]) so a
/// listing view can read names and types without resolving every schema.
///
/// # Example
///
/// ```rust
/// use dtdl_sdk::models::{Interface, Property, PrimitiveSchema, DTDL_V3_CONTEXT};
/// use dtdl_sdk::WireCodec;
///
/// let room = Interface::new("dtmi:com:example:Room;1")
///     .with_context(DTDL_V3_CONTEXT)
///     .with_display_name("Room")
///     .with_content(Property::new("floor", PrimitiveSchema::Integer));
///
/// let wire = room.encode();
/// assert_eq!(wire["@type"], "Interface");
/// assert_eq!(Interface::decode(&wire).unwrap(), room);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    /// Interface DTMI (`@id`)
    pub id: String,
    /// `@type`; `"Interface"` unless the document says otherwise
    pub type_tag: OneOrMany,
    /// JSON-LD `@context`
    pub context: Option<OneOrMany>,
    pub contents: Option<Vec<WireObject>>,
    pub comment: Option<String>,
    pub display_name: Option<LocalizableString>,
    pub description: Option<LocalizableString>,
    /// DTMIs of base interfaces
    pub extends: Option<OneOrMany>,
    /// MQTT extension: topic pattern for telemetry
    pub telemetry_topic: Option<String>,
    /// MQTT extension: topic pattern for commands
    pub command_topic: Option<String>,
    /// MQTT extension: payload format identifier
    pub payload_format: Option<String>,
}

impl Interface {
    /// Create an interface with the given DTMI and `@type: "Interface"`
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_tag: "Interface".into(),
            context: None,
            contents: None,
            comment: None,
            display_name: None,
            description: None,
            extends: None,
            telemetry_topic: None,
            command_topic: None,
            payload_format: None,
        }
    }

    pub fn with_type(mut self, type_tag: impl Into<OneOrMany>) -> Self {
        self.type_tag = type_tag.into();
        self
    }

    pub fn with_context(mut self, context: impl Into<OneOrMany>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<LocalizableString>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<LocalizableString>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_extends(mut self, extends: impl Into<OneOrMany>) -> Self {
        self.extends = Some(extends.into());
        self
    }

    pub fn with_telemetry_topic(mut self, topic: impl Into<String>) -> Self {
        self.telemetry_topic = Some(topic.into());
        self
    }

    pub fn with_command_topic(mut self, topic: impl Into<String>) -> Self {
        self.command_topic = Some(topic.into());
        self
    }

    pub fn with_payload_format(mut self, format: impl Into<String>) -> Self {
        self.payload_format = Some(format.into());
        self
    }

    /// Append a typed content entry, stored in its encoded form
    pub fn with_content(self, content: impl Into<Content>) -> Self {
        let encoded = match content.into().encode() {
            Value::Object(obj) => obj,
            // every Content variant encodes to an object
            _ => WireObject::new(),
        };
        self.with_raw_content(encoded)
    }

    /// Append a content entry exactly as given
    pub fn with_raw_content(mut self, content: WireObject) -> Self {
        self.contents.get_or_insert_with(Vec::new).push(content);
        self
    }

    /// Raw content entries, empty when `contents` was absent
    pub fn raw_contents(&self) -> &[WireObject] {
        self.contents.as_deref().unwrap_or_default()
    }

    /// Decode every content entry independently
    ///
    /// One malformed entry yields an `Err` in its slot and does not affect its
    /// siblings.
    pub fn decode_contents(&self) -> Vec<DecodeResult<Content>> {
        self.raw_contents()
            .iter()
            .map(|obj| Content::decode_entry(obj))
            .collect()
    }

    /// Decode the content entry at `index`
    pub fn decode_content(&self, index: usize) -> Option<DecodeResult<Content>> {
        self.raw_contents().get(index).map(Content::decode_entry)
    }

    /// Find a raw content entry by `name`
    pub fn find_content(&self, name: &str) -> Option<&WireObject> {
        self.raw_contents()
            .iter()
            .find(|obj| obj.get("name").and_then(Value::as_str) == Some(name))
    }

    /// Name and `@type` of each entry, without decoding schemas
    pub fn content_summaries(&self) -> Vec<ContentSummary> {
        self.raw_contents()
            .iter()
            .map(|obj| ContentSummary {
                name: obj.get("name").and_then(Value::as_str).map(str::to_string),
                type_tag: dispatch_tags(obj),
            })
            .collect()
    }

    /// Base interface DTMIs, in declaration order
    pub fn extends_ids(&self) -> Vec<&str> {
        self.extends
            .as_ref()
            .map(|e| e.iter().collect())
            .unwrap_or_default()
    }
}

impl Content {
    fn decode_entry(obj: &WireObject) -> DecodeResult<Content> {
        Content::decode(&Value::Object(obj.clone()))
    }
}

impl WireCodec for Interface {
    fn decode(value: &Value) -> DecodeResult<Self> {
        const ENTITY: &str = "Interface";
        let obj = expect_object(value, ENTITY)?;
        let id = required_str(obj, "@id", ENTITY)?;

        let contents = match field(obj, "contents") {
            None => None,
            Some(Value::Array(items)) => Some(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        item.as_object().cloned().ok_or_else(|| {
                            mismatch(ENTITY, &format!("contents[{}]", i), "object", item)
                        })
                    })
                    .collect::<DecodeResult<Vec<WireObject>>>()?,
            ),
            Some(other) => return Err(mismatch(ENTITY, "contents", "array", other)),
        };

        Ok(Self {
            id,
            // default applies at decode time only; encode writes back whatever is held
            type_tag: OneOrMany::decode_field(obj, "@type", ENTITY)?
                .unwrap_or_else(|| "Interface".into()),
            context: OneOrMany::decode_field(obj, "@context", ENTITY)?,
            contents,
            comment: optional_str(obj, "comment", ENTITY)?,
            display_name: LocalizableString::decode_field(obj, "displayName", ENTITY)?,
            description: LocalizableString::decode_field(obj, "description", ENTITY)?,
            extends: OneOrMany::decode_field(obj, "extends", ENTITY)?,
            telemetry_topic: optional_str(obj, "telemetryTopic", ENTITY)?,
            command_topic: optional_str(obj, "commandTopic", ENTITY)?,
            payload_format: optional_str(obj, "payloadFormat", ENTITY)?,
        })
    }

    fn encode(&self) -> Value {
        let mut obj = WireObject::new();
        obj.insert("@id".to_string(), Value::String(self.id.clone()));
        obj.insert("@type".to_string(), self.type_tag.to_value());
        insert_opt(&mut obj, "@context", self.context.clone());
        insert_opt(&mut obj, "comment", self.comment.clone());
        insert_opt(&mut obj, "displayName", self.display_name.clone());
        insert_opt(&mut obj, "description", self.description.clone());
        insert_opt(&mut obj, "extends", self.extends.clone());
        insert_opt(&mut obj, "telemetryTopic", self.telemetry_topic.clone());
        insert_opt(&mut obj, "commandTopic", self.command_topic.clone());
        insert_opt(&mut obj, "payloadFormat", self.payload_format.clone());
        if let Some(contents) = &self.contents {
            obj.insert(
                "contents".to_string(),
                Value::Array(contents.iter().cloned().map(Value::Object).collect()),
            );
        }
        Value::Object(obj)
    }
}

impl_serde_via_codec!(Interface);

impl TryFrom<&Value> for Interface {
    type Error = DecodeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Interface::decode(value)
    }
}

impl From<&Interface> for Value {
    fn from(interface: &Interface) -> Self {
        interface.encode()
    }
}
