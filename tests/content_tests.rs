//! Content codec tests

use dtdl_sdk::models::{
    Command, Component, Content, ContentKind, OneOrMany, PrimitiveSchema, Property, Relationship,
    Schema, Telemetry,
};
use dtdl_sdk::{DecodeErrorKind, WireCodec};
use serde_json::json;

mod property_tests {
    use super::*;

    #[test]
    fn test_property_round_trip() {
        let wire = json!({
            "@id": "dtmi:com:example:Room:floor;1",
            "@type": "Property",
            "name": "floor",
            "schema": "integer",
            "writable": true,
            "comment": "Floor number"
        });
        let content = Content::decode(&wire).unwrap();
        assert_eq!(content.kind(), ContentKind::Property);
        assert_eq!(content.name(), Some("floor"));
        assert_eq!(
            content.metadata().and_then(|m| m.id.as_deref()),
            Some("dtmi:com:example:Room:floor;1")
        );
        assert_eq!(content.encode(), wire);
    }

    #[test]
    fn test_unset_optionals_are_omitted() {
        let wire = Property::new("floor", PrimitiveSchema::Integer).encode();
        assert_eq!(
            wire,
            json!({"@type": "Property", "name": "floor", "schema": "integer"})
        );
        let obj = wire.as_object().unwrap();
        assert!(obj.values().all(|v| !v.is_null()));
    }

    #[test]
    fn test_semantic_type_with_unit() {
        let wire = json!({
            "@type": ["Property", "Temperature"],
            "name": "setpoint",
            "schema": "double",
            "unit": "degreeCelsius"
        });
        let Content::Property(property) = Content::decode(&wire).unwrap() else {
            panic!("expected property");
        };
        assert_eq!(property.unit.as_deref(), Some("degreeCelsius"));
        assert_eq!(
            property.type_tag,
            OneOrMany::from(vec!["Property", "Temperature"])
        );
        assert_eq!(property.encode(), wire);
    }

    #[test]
    fn test_empty_name_is_invalid() {
        let err = Content::decode(&json!({"@type": "Property", "name": "", "schema": "string"}))
            .unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::InvalidValue);
    }

    #[test]
    fn test_missing_schema_is_missing_field() {
        let err = Content::decode(&json!({"@type": "Property", "name": "floor"})).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::MissingField);
    }

    #[test]
    fn test_null_optional_is_absent() {
        let content = Content::decode(&json!({
            "@type": "Property",
            "name": "floor",
            "schema": "integer",
            "writable": null
        }))
        .unwrap();
        assert_eq!(
            content.encode(),
            json!({"@type": "Property", "name": "floor", "schema": "integer"})
        );
    }
}

mod relationship_tests {
    use super::*;

    #[test]
    fn test_nested_properties_keep_order() {
        let wire = json!({
            "@type": "Relationship",
            "name": "contains",
            "target": "dtmi:com:example:Sensor;1",
            "properties": [
                {"@type": "Property", "name": "installedOn", "schema": "date"},
                {"@type": "Property", "name": "position", "schema": "string", "writable": true}
            ],
            "maxMultiplicity": 10
        });
        let Content::Relationship(relationship) = Content::decode(&wire).unwrap() else {
            panic!("expected relationship");
        };
        let names: Vec<&str> = relationship.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["installedOn", "position"]);
        assert_eq!(relationship.max_multiplicity, Some(10));
        assert_eq!(relationship.encode(), wire);
    }

    #[test]
    fn test_nested_property_without_type() {
        let relationship = Relationship::decode(&json!({
            "@type": "Relationship",
            "name": "feeds",
            "target": "dtmi:com:example:Pump;1",
            "properties": [{"name": "since", "schema": "dateTime"}]
        }))
        .unwrap();
        assert_eq!(relationship.properties[0].type_tag, OneOrMany::from("Property"));
    }

    #[test]
    fn test_built_relationship_encodes_properties_array() {
        let relationship = Relationship::new("contains", "dtmi:com:example:Sensor;1")
            .with_property(Property::new("installedOn", PrimitiveSchema::Date));
        let decoded = Relationship::decode(&relationship.encode()).unwrap();
        assert_eq!(decoded, relationship);
        assert_eq!(relationship.encode()["properties"][0]["name"], json!("installedOn"));
    }

    #[test]
    fn test_missing_target_is_missing_field() {
        let err = Content::decode(&json!({"@type": "Relationship", "name": "contains"}))
            .unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::MissingField);
    }

    #[test]
    fn test_bad_nested_property_reports_index() {
        let err = Content::decode(&json!({
            "@type": "Relationship",
            "name": "contains",
            "target": "dtmi:com:example:Sensor;1",
            "properties": [{"name": "ok", "schema": "string"}, {"name": "bad"}]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("properties[1]"));
    }
}

mod other_content_tests {
    use super::*;

    #[test]
    fn test_telemetry_with_complex_schema() {
        let wire = json!({
            "@type": "Telemetry",
            "name": "readings",
            "schema": {"@type": "Array", "elementSchema": "double"}
        });
        let content = Content::decode(&wire).unwrap();
        assert_eq!(content.kind(), ContentKind::Telemetry);
        assert!(content.schema().is_some_and(Schema::is_complex));
        assert_eq!(content.encode(), wire);
    }

    #[test]
    fn test_component_round_trip() {
        let component = Component::new("thermostat", "dtmi:com:example:Thermostat;1");
        let wire = component.encode();
        assert_eq!(
            wire,
            json!({
                "@type": "Component",
                "name": "thermostat",
                "schema": "dtmi:com:example:Thermostat;1"
            })
        );
        assert_eq!(Content::decode(&wire).unwrap(), Content::Component(component));
    }

    #[test]
    fn test_command_payloads_are_opaque() {
        let wire = json!({
            "@type": "Command",
            "name": "reboot",
            "request": {"name": "delay", "schema": "duration", "x-vendor": [1, 2]},
            "response": {"name": "ok", "schema": "boolean"}
        });
        let Content::Command(command) = Content::decode(&wire).unwrap() else {
            panic!("expected command");
        };
        assert_eq!(command.request.as_ref().map(|r| r.len()), Some(3));
        assert_eq!(command.encode(), wire);
    }

    #[test]
    fn test_bare_command() {
        assert_eq!(
            Command::new("ping").encode(),
            json!({"@type": "Command", "name": "ping"})
        );
    }

    #[test]
    fn test_future_kind_is_raw() {
        let wire = json!({"@type": "FutureKind", "name": "x", "anything": {"goes": true}});
        let content = Content::decode(&wire).unwrap();
        assert_eq!(content.kind(), ContentKind::Raw);
        assert_eq!(content.name(), Some("x"));
        assert_eq!(content.encode(), wire);
    }

    #[test]
    fn test_telemetry_serde_matches_codec() {
        let telemetry = Telemetry::new("temperature", PrimitiveSchema::Double);
        let text = serde_json::to_string(&telemetry).unwrap();
        let parsed: Telemetry = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, telemetry);
        assert_eq!(serde_json::to_value(&telemetry).unwrap(), telemetry.encode());
    }

    #[test]
    fn test_non_object_content_is_type_mismatch() {
        let err = Content::decode(&json!("Property")).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::TypeMismatch);
    }
}
