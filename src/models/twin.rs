//! Digital twin and relationship instances
//!
//! Instance documents mix `$`-prefixed reserved keys with user-defined
//! properties at the same level. Decoding partitions the object into the
//! reserved keys and a free-form bag; encoding writes the reserved keys first
//! and merges the bag back in. Key order inside the bag is not significant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::wire::{expect_object, field, insert_opt, optional_str, required_str};
use crate::codec::{DecodeResult, WireCodec, WireObject, impl_serde_via_codec};

pub const DT_ID: &str = "$dtId";
pub const METADATA: &str = "$metadata";
pub const ETAG: &str = "$etag";
pub const LAST_UPDATE_TIME: &str = "$lastUpdateTime";
pub const MODEL: &str = "$model";
pub const RELATIONSHIP_ID: &str = "$relationshipId";
pub const SOURCE_ID: &str = "$sourceId";
pub const TARGET_ID: &str = "$targetId";
pub const RELATIONSHIP_NAME: &str = "$relationshipName";
pub const RELATIONSHIP_LINK: &str = "$relationshipLink";

/// Copy every entry of `obj` whose key is not in `reserved`
fn partition(obj: &WireObject, reserved: &[&str]) -> WireObject {
    obj.iter()
        .filter(|(key, _)| !reserved.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Merge `bag` into `obj`; reserved keys already in `obj` win
fn merge(obj: &mut WireObject, bag: &WireObject) {
    for (key, value) in bag {
        if !obj.contains_key(key) {
            obj.insert(key.clone(), value.clone());
        }
    }
}

fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// `$metadata` of a digital twin
#[derive(Debug, Clone, PartialEq)]
pub struct DigitalTwinMetadata {
    /// Model DTMI (`$model`); required by the service on create, absent in some patch bodies
    pub model: Option<String>,
    /// `$metadata.$lastUpdateTime`
    pub last_update_time: Option<String>,
    /// Remaining entries, usually per-property metadata
    pub properties: WireObject,
}

impl DigitalTwinMetadata {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: Some(model.into()),
            last_update_time: None,
            properties: WireObject::new(),
        }
    }

    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.last_update_time.as_deref())
    }
}

impl WireCodec for DigitalTwinMetadata {
    fn decode(value: &Value) -> DecodeResult<Self> {
        const ENTITY: &str = "DigitalTwinMetadata";
        let obj = expect_object(value, ENTITY)?;
        Ok(Self {
            model: optional_str(obj, MODEL, ENTITY)?,
            last_update_time: optional_str(obj, LAST_UPDATE_TIME, ENTITY)?,
            properties: partition(obj, &[MODEL, LAST_UPDATE_TIME]),
        })
    }

    fn encode(&self) -> Value {
        let mut obj = WireObject::new();
        insert_opt(&mut obj, MODEL, self.model.clone());
        insert_opt(&mut obj, LAST_UPDATE_TIME, self.last_update_time.clone());
        merge(&mut obj, &self.properties);
        Value::Object(obj)
    }
}

/// A digital twin instance
///
/// Every reserved key is optional on decode: create bodies carry the twin id
/// in the request path, and update bodies may omit `$metadata`. Keys that were
/// absent stay absent on encode.
///
/// # Example
///
/// ```rust
/// use dtdl_sdk::models::BasicDigitalTwin;
/// use dtdl_sdk::WireCodec;
/// use serde_json::json;
///
/// let twin = BasicDigitalTwin::decode(&json!({
///     "$dtId": "Room-101",
///     "$metadata": {"$model": "dtmi:com:example:Room;1"},
///     "temperature": 22.5
/// })).unwrap();
///
/// assert_eq!(twin.dt_id.as_deref(), Some("Room-101"));
/// assert_eq!(twin.model(), Some("dtmi:com:example:Room;1"));
/// assert_eq!(twin.contents["temperature"], json!(22.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BasicDigitalTwin {
    /// `$dtId`
    pub dt_id: Option<String>,
    pub metadata: Option<DigitalTwinMetadata>,
    /// `$etag`, used for optimistic concurrency
    pub etag: Option<String>,
    /// Top-level `$lastUpdateTime`
    pub last_update_time: Option<String>,
    /// User-defined properties and components
    pub contents: WireObject,
}

impl BasicDigitalTwin {
    pub fn new(dt_id: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            dt_id: Some(dt_id.into()),
            metadata: Some(DigitalTwinMetadata::new(model)),
            etag: None,
            last_update_time: None,
            contents: WireObject::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.contents.insert(name.into(), value.into());
        self
    }

    pub fn model(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.model.as_deref())
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.contents.get(name)
    }

    /// Decode a component stored under `name`
    pub fn component(&self, name: &str) -> Option<DecodeResult<BasicDigitalTwinComponent>> {
        self.contents.get(name).map(BasicDigitalTwinComponent::decode)
    }

    /// Top-level `$lastUpdateTime`, falling back to the metadata one
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.last_update_time.as_deref())
            .or_else(|| self.metadata.as_ref().and_then(|m| m.last_updated_at()))
    }
}

impl WireCodec for BasicDigitalTwin {
    fn decode(value: &Value) -> DecodeResult<Self> {
        const ENTITY: &str = "BasicDigitalTwin";
        let obj = expect_object(value, ENTITY)?;
        let metadata = field(obj, METADATA)
            .map(DigitalTwinMetadata::decode)
            .transpose()
            .map_err(|e| e.within(METADATA))?;
        Ok(Self {
            dt_id: optional_str(obj, DT_ID, ENTITY)?,
            metadata,
            etag: optional_str(obj, ETAG, ENTITY)?,
            last_update_time: optional_str(obj, LAST_UPDATE_TIME, ENTITY)?,
            contents: partition(obj, &[DT_ID, METADATA, ETAG, LAST_UPDATE_TIME]),
        })
    }

    fn encode(&self) -> Value {
        let mut obj = WireObject::new();
        insert_opt(&mut obj, DT_ID, self.dt_id.clone());
        insert_opt(&mut obj, ETAG, self.etag.clone());
        insert_opt(&mut obj, LAST_UPDATE_TIME, self.last_update_time.clone());
        if let Some(metadata) = &self.metadata {
            obj.insert(METADATA.to_string(), metadata.encode());
        }
        merge(&mut obj, &self.contents);
        Value::Object(obj)
    }
}

/// A component value inside a digital twin
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasicDigitalTwinComponent {
    /// The component's `$metadata`, kept as-is
    pub metadata: WireObject,
    pub properties: WireObject,
}

impl WireCodec for BasicDigitalTwinComponent {
    fn decode(value: &Value) -> DecodeResult<Self> {
        const ENTITY: &str = "BasicDigitalTwinComponent";
        let obj = expect_object(value, ENTITY)?;
        let metadata = match obj.get(METADATA) {
            None | Some(Value::Null) => WireObject::new(),
            Some(Value::Object(map)) => map.clone(),
            Some(other) => {
                return Err(crate::codec::wire::mismatch(ENTITY, METADATA, "object", other));
            }
        };
        Ok(Self {
            metadata,
            properties: partition(obj, &[METADATA]),
        })
    }

    /// Always writes `$metadata`, which the service requires on components
    fn encode(&self) -> Value {
        let mut obj = WireObject::new();
        obj.insert(METADATA.to_string(), Value::Object(self.metadata.clone()));
        merge(&mut obj, &self.properties);
        Value::Object(obj)
    }
}

/// A relationship instance between two twins
///
/// The ids are optional so that a create body, which names only the target
/// and the relationship, decodes as well as a full listing entry.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicRelationship {
    pub relationship_id: Option<String>,
    pub source_id: Option<String>,
    pub target_id: Option<String>,
    /// Name of the relationship as declared in the source model
    pub relationship_name: Option<String>,
    pub etag: Option<String>,
    /// User-defined relationship properties
    pub properties: WireObject,
}

impl BasicRelationship {
    pub fn new(
        relationship_id: impl Into<String>,
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        relationship_name: impl Into<String>,
    ) -> Self {
        Self {
            relationship_id: Some(relationship_id.into()),
            source_id: Some(source_id.into()),
            ..Self::to_target(target_id, relationship_name)
        }
    }

    /// Body for creating a relationship; both ids come from the request path
    pub fn to_target(target_id: impl Into<String>, relationship_name: impl Into<String>) -> Self {
        Self {
            relationship_id: None,
            source_id: None,
            target_id: Some(target_id.into()),
            relationship_name: Some(relationship_name.into()),
            etag: None,
            properties: WireObject::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

impl WireCodec for BasicRelationship {
    fn decode(value: &Value) -> DecodeResult<Self> {
        const ENTITY: &str = "BasicRelationship";
        let obj = expect_object(value, ENTITY)?;
        Ok(Self {
            relationship_id: optional_str(obj, RELATIONSHIP_ID, ENTITY)?,
            source_id: optional_str(obj, SOURCE_ID, ENTITY)?,
            target_id: optional_str(obj, TARGET_ID, ENTITY)?,
            relationship_name: optional_str(obj, RELATIONSHIP_NAME, ENTITY)?,
            etag: optional_str(obj, ETAG, ENTITY)?,
            properties: partition(
                obj,
                &[RELATIONSHIP_ID, SOURCE_ID, TARGET_ID, RELATIONSHIP_NAME, ETAG],
            ),
        })
    }

    fn encode(&self) -> Value {
        let mut obj = WireObject::new();
        insert_opt(&mut obj, RELATIONSHIP_ID, self.relationship_id.clone());
        insert_opt(&mut obj, SOURCE_ID, self.source_id.clone());
        insert_opt(&mut obj, TARGET_ID, self.target_id.clone());
        insert_opt(&mut obj, RELATIONSHIP_NAME, self.relationship_name.clone());
        insert_opt(&mut obj, ETAG, self.etag.clone());
        merge(&mut obj, &self.properties);
        Value::Object(obj)
    }
}

impl_serde_via_codec!(
    DigitalTwinMetadata,
    BasicDigitalTwin,
    BasicDigitalTwinComponent,
    BasicRelationship
);

/// A relationship that points at a twin, as returned by the incoming-relationships listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncomingRelationship {
    #[serde(rename = "$relationshipId")]
    pub relationship_id: String,
    #[serde(rename = "$sourceId")]
    pub source_id: String,
    #[serde(rename = "$relationshipName")]
    pub relationship_name: String,
    #[serde(rename = "$relationshipLink", skip_serializing_if = "Option::is_none")]
    pub relationship_link: Option<String>,
}

impl WireCodec for IncomingRelationship {
    fn decode(value: &Value) -> DecodeResult<Self> {
        const ENTITY: &str = "IncomingRelationship";
        let obj = expect_object(value, ENTITY)?;
        Ok(Self {
            relationship_id: required_str(obj, RELATIONSHIP_ID, ENTITY)?,
            source_id: required_str(obj, SOURCE_ID, ENTITY)?,
            relationship_name: required_str(obj, RELATIONSHIP_NAME, ENTITY)?,
            relationship_link: optional_str(obj, RELATIONSHIP_LINK, ENTITY)?,
        })
    }

    fn encode(&self) -> Value {
        let mut obj = WireObject::new();
        obj.insert(
            RELATIONSHIP_ID.to_string(),
            Value::String(self.relationship_id.clone()),
        );
        obj.insert(SOURCE_ID.to_string(), Value::String(self.source_id.clone()));
        obj.insert(
            RELATIONSHIP_NAME.to_string(),
            Value::String(self.relationship_name.clone()),
        );
        insert_opt(&mut obj, RELATIONSHIP_LINK, self.relationship_link.clone());
        Value::Object(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::DecodeErrorKind;
    use serde_json::json;

    #[test]
    fn test_reserved_keys_win_over_bag() {
        let mut twin = BasicDigitalTwin::new("Room-1", "dtmi:com:example:Room;1");
        twin.contents
            .insert(DT_ID.to_string(), Value::String("shadow".to_string()));
        assert_eq!(twin.encode()[DT_ID], json!("Room-1"));
    }

    #[test]
    fn test_bad_model_reports_nested_path() {
        let err = BasicDigitalTwin::decode(&json!({"$dtId": "a", "$metadata": {"$model": 7}}))
            .unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::TypeMismatch);
        assert!(err.to_string().contains("$metadata.$model"));
    }

    #[test]
    fn test_last_updated_at_parses_rfc3339() {
        let twin = BasicDigitalTwin::decode(&json!({
            "$dtId": "a",
            "$metadata": {
                "$model": "dtmi:com:example:Room;1",
                "$lastUpdateTime": "2024-05-01T10:00:00.1234567Z"
            }
        }))
        .unwrap();
        let ts = twin.last_updated_at().unwrap();
        assert_eq!(ts.to_rfc3339_opts(chrono::SecondsFormat::Secs, true), "2024-05-01T10:00:00Z");
    }

    #[test]
    fn test_component_without_metadata_gets_empty_metadata() {
        let component = BasicDigitalTwinComponent::decode(&json!({"mode": "auto"})).unwrap();
        assert!(component.metadata.is_empty());
        assert_eq!(component.encode(), json!({"$metadata": {}, "mode": "auto"}));
    }

    #[test]
    fn test_incoming_relationship_serde_matches_codec() {
        let incoming = IncomingRelationship {
            relationship_id: "r1".to_string(),
            source_id: "Floor-1".to_string(),
            relationship_name: "contains".to_string(),
            relationship_link: None,
        };
        let via_serde = serde_json::to_value(&incoming).unwrap();
        assert_eq!(via_serde, incoming.encode());
        assert_eq!(IncomingRelationship::decode(&via_serde).unwrap(), incoming);
    }
}
