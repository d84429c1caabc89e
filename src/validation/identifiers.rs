//! DTMI syntax checks
//!
//! Identifiers are carried as opaque strings by the codec. This pass checks
//! every identifier an interface references against the DTMI grammar:
//! `dtmi:` followed by `:`-separated path segments and an optional
//! `;major[.minor]` version.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::models::{Content, Interface, Schema};

static DTMI_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^dtmi:(?:_+[A-Za-z0-9]|[A-Za-z])(?:[A-Za-z0-9_]*[A-Za-z0-9])?(?::(?:_+[A-Za-z0-9]|[A-Za-z])(?:[A-Za-z0-9_]*[A-Za-z0-9])?)*(?:;[1-9][0-9]{0,8}(?:\.[1-9][0-9]{0,5})?)?$",
    )
    .unwrap()
});

/// Check whether a string is a syntactically valid DTMI
///
/// # Example
///
/// ```rust
/// use dtdl_sdk::validation::is_valid_dtmi;
///
/// assert!(is_valid_dtmi("dtmi:com:example:Thermostat;1"));
/// assert!(!is_valid_dtmi("urn:com:example:Thermostat"));
/// ```
pub fn is_valid_dtmi(id: &str) -> bool {
    DTMI_REGEX.is_match(id)
}

/// An identifier that does not follow DTMI syntax
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidIdentifier {
    /// Where the identifier was found, e.g. `extends[1]` or `contents[0].target`
    pub location: String,
    pub value: String,
}

/// DTMI syntax validator
#[derive(Debug, Default)]
pub struct IdentifierValidator;

impl IdentifierValidator {
    /// Create a new identifier validator
    pub fn new() -> Self {
        Self
    }

    /// Check the identifiers an interface declares or references
    ///
    /// Covers the interface `@id`, `extends`, content `@id`s, component
    /// schemas, relationship targets, complex schema `@id`s and string schemas
    /// that use the `dtmi:` scheme. Entries that fail to decode are skipped.
    pub fn check_interface(&self, interface: &Interface) -> Vec<InvalidIdentifier> {
        let mut found = Vec::new();
        check(&mut found, "@id", &interface.id);
        for (i, base) in interface.extends_ids().into_iter().enumerate() {
            check(&mut found, &format!("extends[{}]", i), base);
        }

        for (i, decoded) in interface.decode_contents().into_iter().enumerate() {
            let Ok(content) = decoded else {
                continue;
            };
            let location = format!("contents[{}]", i);
            if let Some(id) = content.metadata().and_then(|m| m.id.as_deref()) {
                check(&mut found, &format!("{}.@id", location), id);
            }
            match &content {
                Content::Component(component) => {
                    check(&mut found, &format!("{}.schema", location), &component.schema);
                }
                Content::Relationship(relationship) => {
                    check(&mut found, &format!("{}.target", location), &relationship.target);
                    for (j, property) in relationship.properties.iter().enumerate() {
                        check_schema(
                            &mut found,
                            &format!("{}.properties[{}].schema", location, j),
                            &property.schema,
                        );
                    }
                }
                _ => {
                    if let Some(schema) = content.schema() {
                        check_schema(&mut found, &format!("{}.schema", location), schema);
                    }
                }
            }
        }

        for invalid in &found {
            warn!(
                "Invalid DTMI '{}' at {} in {}",
                invalid.value, invalid.location, interface.id
            );
        }
        found
    }
}

fn check(found: &mut Vec<InvalidIdentifier>, location: &str, value: &str) {
    if !is_valid_dtmi(value) {
        found.push(InvalidIdentifier {
            location: location.to_string(),
            value: value.to_string(),
        });
    }
}

fn check_schema(found: &mut Vec<InvalidIdentifier>, location: &str, schema: &Schema) {
    let id = match schema {
        Schema::Reference(reference) => {
            if reference.starts_with("dtmi:") {
                check(found, location, reference);
            }
            None
        }
        Schema::Enum(e) => e.metadata.id.as_deref(),
        Schema::Map(m) => m.metadata.id.as_deref(),
        Schema::Object(o) => o.metadata.id.as_deref(),
        Schema::Array(a) => a.metadata.id.as_deref(),
        Schema::Primitive(_) | Schema::Raw(_) => None,
    };
    if let Some(id) = id {
        check(found, &format!("{}.@id", location), id);
    }

    match schema {
        Schema::Object(o) => {
            for field in &o.fields {
                check_schema(found, &format!("{}.{}", location, field.name), &field.schema);
            }
        }
        Schema::Map(m) => {
            check_schema(found, &format!("{}.mapValue", location), &m.map_value.schema);
        }
        Schema::Array(a) => {
            check_schema(found, &format!("{}.elementSchema", location), &a.element_schema);
        }
        _ => {}
    }
}
