//! Import and export tests

use dtdl_sdk::export::ModelExporter;
use dtdl_sdk::import::{ImportConfig, ImportError, ModelImporter};
use dtdl_sdk::models::Interface;
use dtdl_sdk::{DecodeErrorKind, WireCodec};
use serde_json::{Value, json};
use std::io::Write;

fn document() -> Value {
    json!([
        {
            "@context": "dtmi:dtdl:context;3",
            "@id": "dtmi:com:example:Room;1",
            "@type": "Interface",
            "contents": [
                {"@type": "Property", "name": "floor", "schema": "integer"},
                {"@type": "Relationship", "name": "contains", "target": "dtmi:com:example:Sensor;1"}
            ]
        },
        {
            "@context": "dtmi:dtdl:context;3",
            "@id": "dtmi:com:example:Sensor;1",
            "@type": "Interface",
            "contents": [
                {"@type": "Telemetry", "name": "reading", "schema": "double"}
            ]
        }
    ])
}

mod model_import_tests {
    use super::*;

    #[test]
    fn test_import_array() {
        let result = ModelImporter::new().import_str(&document().to_string()).unwrap();

        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.interfaces.len(), 2);
        assert_eq!(result.interfaces[0].id, "dtmi:com:example:Room;1");
        assert_eq!(result.interfaces[1].raw_contents().len(), 1);
    }

    #[test]
    fn test_skip_and_continue() {
        let json = json!([
            {"@id": "dtmi:com:example:A;1"},
            {"@type": "Interface"},
            {"@id": "dtmi:com:example:C;1", "contents": "nope"},
            {"@id": "dtmi:com:example:D;1"}
        ]);
        let result = ModelImporter::new().import_str(&json.to_string()).unwrap();

        let ids: Vec<&str> = result.interfaces.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["dtmi:com:example:A;1", "dtmi:com:example:D;1"]);
        assert_eq!(result.errors.len(), 2);
        match &result.errors[0] {
            ImportError::Decode { index, source } => {
                assert_eq!(*index, 1);
                assert_eq!(source.kind(), DecodeErrorKind::MissingField);
            }
            other => panic!("unexpected error: {}", other),
        }
        assert!(matches!(result.errors[1], ImportError::Decode { index: 2, .. }));
    }

    #[test]
    fn test_contents_are_lazy_by_default() {
        let json = json!({
            "@id": "dtmi:com:example:A;1",
            "contents": [{"@type": "Property", "name": "broken"}]
        });
        let result = ModelImporter::new().import_str(&json.to_string()).unwrap();
        assert!(result.errors.is_empty());
        assert_eq!(result.interfaces.len(), 1);
    }

    #[test]
    fn test_resolve_contents_reports_bad_entries() {
        let json = json!({
            "@id": "dtmi:com:example:A;1",
            "contents": [
                {"@type": "Property", "name": "ok", "schema": "string"},
                {"@type": "Property", "name": "broken"}
            ]
        });
        let importer =
            ModelImporter::with_config(ImportConfig::builder().resolve_contents(true).build());
        let result = importer.import_str(&json.to_string()).unwrap();

        assert_eq!(result.interfaces.len(), 1);
        assert_eq!(result.errors.len(), 1);
        assert!(matches!(
            &result.errors[0],
            ImportError::Content { interface, index: 1, .. } if interface == "dtmi:com:example:A;1"
        ));
    }

    #[test]
    fn test_validation_warnings() {
        let json = json!({
            "@id": "urn:example:A",
            "contents": [
                {"@type": "Property", "name": "x", "schema": "string"},
                {"@type": "Telemetry", "name": "x", "schema": "double"}
            ]
        });
        let result = ModelImporter::new().import_str(&json.to_string()).unwrap();
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings.len(), 2);

        let quiet = ModelImporter::with_config(
            ImportConfig::builder()
                .check_duplicate_names(false)
                .check_identifiers(false)
                .build(),
        );
        assert!(quiet.import_str(&json.to_string()).unwrap().warnings.is_empty());
    }

    #[test]
    fn test_import_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(document().to_string().as_bytes()).unwrap();

        let result = ModelImporter::new().import_file(file.path()).unwrap();
        assert_eq!(result.interfaces.len(), 2);
    }

    #[test]
    fn test_import_missing_file_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = ModelImporter::new().import_file(&path).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}

mod model_export_tests {
    use super::*;

    #[test]
    fn test_import_export_is_lossless() {
        let original = document();
        let result = ModelImporter::new().import_str(&original.to_string()).unwrap();
        let exported = ModelExporter::compact().export(&result.interfaces).unwrap();

        let reparsed: Value = serde_json::from_str(&exported.content).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_single_interface_exported_as_object() {
        let exported = ModelExporter::pretty()
            .export(&[Interface::new("dtmi:com:example:A;1")])
            .unwrap();
        let value: Value = serde_json::from_str(&exported.content).unwrap();
        assert!(value.is_object());
        assert_eq!(exported.count, 1);
    }

    #[test]
    fn test_export_to_file_and_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models.json");
        let interfaces = vec![
            Interface::new("dtmi:com:example:A;1"),
            Interface::new("dtmi:com:example:B;1").with_extends("dtmi:com:example:A;1"),
        ];

        ModelExporter::pretty()
            .export_to_file(&interfaces, &path)
            .unwrap();
        let result = ModelImporter::new().import_file(&path).unwrap();
        assert_eq!(result.interfaces, interfaces);
        assert_eq!(
            result.interfaces[1].encode()["extends"],
            json!("dtmi:com:example:A;1")
        );
    }
}
