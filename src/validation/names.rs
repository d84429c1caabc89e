//! Duplicate name detection
//!
//! The decoders accept duplicate names (object fields, enum values, interface
//! contents, relationship properties) so that a slightly malformed model can
//! still be read. This pass reports them as warnings.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::{Content, Interface, Schema};

/// A name used more than once within one scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateName {
    /// Path of the scope, e.g. `dtmi:com:example:Room;1/location/schema`
    pub scope: String,
    pub name: String,
    pub occurrences: usize,
}

/// Duplicate name validator
#[derive(Debug, Default)]
pub struct NameValidator;

impl NameValidator {
    /// Create a new name validator
    pub fn new() -> Self {
        Self
    }

    /// Check an interface's contents and everything nested in them
    ///
    /// Content entries that fail to decode are skipped; only their names take
    /// part in the interface-level check.
    pub fn check_interface(&self, interface: &Interface) -> Vec<DuplicateName> {
        let mut found = Vec::new();
        let summaries = interface.content_summaries();
        collect_duplicates(
            summaries.iter().filter_map(|s| s.name.as_deref()),
            &interface.id,
            &mut found,
        );

        for (index, decoded) in interface.decode_contents().into_iter().enumerate() {
            let content = match decoded {
                Ok(content) => content,
                Err(e) => {
                    debug!("Skipping undecodable content {} of {}: {}", index, interface.id, e);
                    continue;
                }
            };
            let scope = format!("{}/{}", interface.id, content.name().unwrap_or("?"));
            self.check_content_into(&content, &scope, &mut found);
        }

        for duplicate in &found {
            warn!(
                "Duplicate name '{}' appears {} times in {}",
                duplicate.name, duplicate.occurrences, duplicate.scope
            );
        }
        found
    }

    /// Check a schema tree rooted at `scope`
    pub fn check_schema(&self, schema: &Schema, scope: &str) -> Vec<DuplicateName> {
        let mut found = Vec::new();
        check_schema_into(schema, scope, &mut found);
        found
    }

    fn check_content_into(&self, content: &Content, scope: &str, found: &mut Vec<DuplicateName>) {
        match content {
            Content::Property(p) => check_schema_into(&p.schema, &format!("{}/schema", scope), found),
            Content::Telemetry(t) => check_schema_into(&t.schema, &format!("{}/schema", scope), found),
            Content::Relationship(r) => {
                collect_duplicates(r.properties.iter().map(|p| p.name.as_str()), scope, found);
                for property in &r.properties {
                    check_schema_into(
                        &property.schema,
                        &format!("{}/{}/schema", scope, property.name),
                        found,
                    );
                }
            }
            Content::Component(_) | Content::Command(_) | Content::Raw(_) => {}
        }
    }
}

fn check_schema_into(schema: &Schema, scope: &str, found: &mut Vec<DuplicateName>) {
    match schema {
        Schema::Enum(e) => {
            collect_duplicates(e.enum_values.iter().map(|v| v.name.as_str()), scope, found);
        }
        Schema::Object(o) => {
            collect_duplicates(o.fields.iter().map(|f| f.name.as_str()), scope, found);
            for field in &o.fields {
                check_schema_into(&field.schema, &format!("{}/{}", scope, field.name), found);
            }
        }
        Schema::Map(m) => {
            check_schema_into(&m.map_value.schema, &format!("{}/{}", scope, m.map_value.name), found)
        }
        Schema::Array(a) => check_schema_into(&a.element_schema, &format!("{}/[]", scope), found),
        Schema::Primitive(_) | Schema::Reference(_) | Schema::Raw(_) => {}
    }
}

/// Record every name seen more than once, in order of first appearance
fn collect_duplicates<'a>(
    names: impl Iterator<Item = &'a str>,
    scope: &str,
    found: &mut Vec<DuplicateName>,
) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();
    for name in names {
        let count = counts.entry(name).or_insert(0);
        if *count == 0 {
            order.push(name);
        }
        *count += 1;
    }
    for name in order {
        let occurrences = counts[name];
        if occurrences > 1 {
            found.push(DuplicateName {
                scope: scope.to_string(),
                name: name.to_string(),
                occurrences,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ObjectField, ObjectSchema, PrimitiveSchema};

    #[test]
    fn test_no_duplicates_in_clean_schema() {
        let schema = Schema::from(ObjectSchema::new(vec![
            ObjectField::new("lat", PrimitiveSchema::Double),
            ObjectField::new("lon", PrimitiveSchema::Double),
        ]));
        assert!(NameValidator::new().check_schema(&schema, "loc").is_empty());
    }

    #[test]
    fn test_duplicate_fields_reported_once() {
        let schema = Schema::from(ObjectSchema::new(vec![
            ObjectField::new("lat", PrimitiveSchema::Double),
            ObjectField::new("lat", PrimitiveSchema::Float),
            ObjectField::new("lat", PrimitiveSchema::Long),
        ]));
        let found = NameValidator::new().check_schema(&schema, "loc");
        assert_eq!(
            found,
            vec![DuplicateName {
                scope: "loc".to_string(),
                name: "lat".to_string(),
                occurrences: 3,
            }]
        );
    }
}
