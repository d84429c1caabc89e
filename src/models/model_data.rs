//! Model definition envelope returned by the models endpoints

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::interface::Interface;
use crate::codec::{DecodeError, DecodeResult, WireCodec};

/// A stored model: service-side metadata plus the DTDL document itself
///
/// The document is only present when the model was requested with its
/// definition; [`ModelData::interface`] decodes it on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelData {
    /// Model DTMI
    pub id: String,
    /// Language code to display name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub display_name: BTreeMap<String, String>,
    /// Language code to description
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub description: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub decommissioned: bool,
    /// The raw DTDL document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<Value>,
}

impl ModelData {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: BTreeMap::new(),
            description: BTreeMap::new(),
            upload_time: None,
            decommissioned: false,
            model: None,
        }
    }

    /// Decode the embedded DTDL document, if any
    pub fn interface(&self) -> Option<DecodeResult<Interface>> {
        self.model.as_ref().map(Interface::decode)
    }
}

impl WireCodec for ModelData {
    fn decode(value: &Value) -> DecodeResult<Self> {
        serde_json::from_value(value.clone()).map_err(|e| DecodeError::InvalidValue {
            entity: "ModelData",
            field: "*".to_string(),
            reason: e.to_string(),
        })
    }

    fn encode(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_model_data_with_definition() {
        let data = ModelData::decode(&json!({
            "id": "dtmi:com:example:Room;1",
            "displayName": {"en": "Room"},
            "uploadTime": "2024-01-15T08:30:00Z",
            "decommissioned": false,
            "model": {"@id": "dtmi:com:example:Room;1", "@type": "Interface"}
        }))
        .unwrap();

        assert_eq!(data.display_name.get("en").map(String::as_str), Some("Room"));
        assert!(data.upload_time.is_some());
        let interface = data.interface().unwrap().unwrap();
        assert_eq!(interface.id, "dtmi:com:example:Room;1");
    }

    #[test]
    fn test_model_data_without_definition() {
        let data = ModelData::decode(&json!({"id": "dtmi:com:example:Room;1"})).unwrap();
        assert!(data.interface().is_none());
        assert!(!data.decommissioned);
        assert_eq!(data.encode(), json!({"id": "dtmi:com:example:Room;1", "decommissioned": false}));
    }

    #[test]
    fn test_model_data_missing_id_is_invalid() {
        assert!(ModelData::decode(&json!({"decommissioned": true})).is_err());
    }
}
