//! Validation tests

use dtdl_sdk::models::{
    Component, EnumSchema, EnumValue, EnumValueSchema, Interface, MapSchema, ObjectField,
    ObjectSchema, PrimitiveSchema, Property, Relationship, Schema, Telemetry,
};
use dtdl_sdk::validation::{
    IdentifierValidator, NameValidator, ValidationReport, is_valid_dtmi,
};
use dtdl_sdk::WireCodec;
use serde_json::json;

mod duplicate_name_tests {
    use super::*;

    #[test]
    fn test_clean_interface() {
        let interface = Interface::new("dtmi:com:example:Room;1")
            .with_content(Property::new("floor", PrimitiveSchema::Integer))
            .with_content(Telemetry::new("temperature", PrimitiveSchema::Double));
        assert!(NameValidator::new().check_interface(&interface).is_empty());
    }

    #[test]
    fn test_duplicate_contents() {
        let interface = Interface::new("dtmi:com:example:Room;1")
            .with_content(Property::new("floor", PrimitiveSchema::Integer))
            .with_content(Telemetry::new("floor", PrimitiveSchema::Double));
        let found = NameValidator::new().check_interface(&interface);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].scope, "dtmi:com:example:Room;1");
        assert_eq!(found[0].name, "floor");
        assert_eq!(found[0].occurrences, 2);
    }

    #[test]
    fn test_duplicates_in_nested_schemas() {
        let location = ObjectSchema::new(vec![
            ObjectField::new("lat", PrimitiveSchema::Double),
            ObjectField::new("lat", PrimitiveSchema::Double),
        ]);
        let interface = Interface::new("dtmi:com:example:Room;1")
            .with_content(Property::new(
                "zones",
                MapSchema::new("zoneId", "zone", location),
            ))
            .with_content(
                Relationship::new("contains", "dtmi:com:example:Sensor;1")
                    .with_property(Property::new("since", PrimitiveSchema::Date))
                    .with_property(Property::new("since", PrimitiveSchema::DateTime)),
            );

        let found = NameValidator::new().check_interface(&interface);
        let scopes: Vec<&str> = found.iter().map(|d| d.scope.as_str()).collect();
        assert_eq!(
            scopes,
            vec![
                "dtmi:com:example:Room;1/zones/schema/zone",
                "dtmi:com:example:Room;1/contains",
            ]
        );
    }

    #[test]
    fn test_duplicate_enum_values() {
        let schema = Schema::from(EnumSchema::new(
            EnumValueSchema::Integer,
            vec![
                EnumValue::new("low", 1i64),
                EnumValue::new("low", 2i64),
            ],
        ));
        let found = NameValidator::new().check_schema(&schema, "mode");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "low");
    }

    #[test]
    fn test_decoder_accepts_duplicates() {
        let schema = Schema::decode(&json!({
            "@type": "Object",
            "fields": [
                {"name": "x", "schema": "double"},
                {"name": "x", "schema": "double"}
            ]
        }));
        assert!(schema.is_ok());
    }
}

mod identifier_tests {
    use super::*;

    #[test]
    fn test_dtmi_syntax() {
        assert!(is_valid_dtmi("dtmi:com:example:Room;1"));
        assert!(is_valid_dtmi("dtmi:com:example:Room;1.2"));
        assert!(!is_valid_dtmi("dtmi:com:example:Room;1.0"));
        assert!(!is_valid_dtmi("dtmi:com:example:Room;"));
        assert!(!is_valid_dtmi("dtmi:com:example:Ro-om;1"));
    }

    #[test]
    fn test_references_are_checked() {
        let interface = Interface::new("dtmi:com:example:Room;1")
            .with_extends(vec!["dtmi:com:example:Base;1", "not-a-dtmi"])
            .with_content(Component::new("hvac", "hvac"))
            .with_content(Relationship::new("contains", "dtmi:com:example:Sensor;0"))
            .with_content(Property::new("location", Schema::reference("dtmi:bad:;1")))
            .with_content(Property::new("label", PrimitiveSchema::String));

        let found = IdentifierValidator::new().check_interface(&interface);
        let locations: Vec<&str> = found.iter().map(|i| i.location.as_str()).collect();
        assert_eq!(
            locations,
            vec![
                "extends[1]",
                "contents[0].schema",
                "contents[1].target",
                "contents[2].schema",
            ]
        );
    }

    #[test]
    fn test_non_dtmi_references_are_ignored() {
        let interface = Interface::new("dtmi:com:example:Room;1").with_content(Property::new(
            "location",
            Schema::reference("geo:Point"),
        ));
        assert!(IdentifierValidator::new().check_interface(&interface).is_empty());
    }
}

mod report_tests {
    use super::*;

    #[test]
    fn test_report_combines_checks() {
        let interface = Interface::decode(&json!({
            "@id": "dtmi:com:example:Room",
            "contents": [
                {"@type": "Property", "name": "a", "schema": "string"},
                {"@type": "Property", "name": "a", "schema": "string"}
            ]
        }))
        .unwrap();

        let report = ValidationReport::for_interface(&interface);
        assert_eq!(report.duplicate_names.len(), 1);
        assert!(report.invalid_identifiers.is_empty());
        assert!(!report.is_clean());
        assert_eq!(report.messages().len(), 1);
    }
}
