//! JSON Patch (RFC 6902) bodies for twin and relationship updates

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::WireObject;

/// A single JSON Patch operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Move { from: String, path: String },
    Copy { from: String, path: String },
    Test { path: String, value: Value },
}

impl PatchOperation {
    pub fn path(&self) -> &str {
        match self {
            PatchOperation::Add { path, .. }
            | PatchOperation::Remove { path }
            | PatchOperation::Replace { path, .. }
            | PatchOperation::Move { path, .. }
            | PatchOperation::Copy { path, .. }
            | PatchOperation::Test { path, .. } => path,
        }
    }
}

/// Escape one JSON Pointer reference token (RFC 6901)
pub fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

/// An ordered list of patch operations
///
/// # Example
///
/// ```rust
/// use dtdl_sdk::models::JsonPatch;
/// use serde_json::json;
///
/// let patch = JsonPatch::new()
///     .replace("/temperature", json!(21.0))
///     .remove("/humidity");
///
/// assert_eq!(
///     serde_json::to_value(&patch).unwrap(),
///     json!([
///         {"op": "replace", "path": "/temperature", "value": 21.0},
///         {"op": "remove", "path": "/humidity"}
///     ])
/// );
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct JsonPatch(pub Vec<PatchOperation>);

impl JsonPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, path: impl Into<String>, value: Value) -> Self {
        self.0.push(PatchOperation::Add {
            path: path.into(),
            value,
        });
        self
    }

    pub fn remove(mut self, path: impl Into<String>) -> Self {
        self.0.push(PatchOperation::Remove { path: path.into() });
        self
    }

    pub fn replace(mut self, path: impl Into<String>, value: Value) -> Self {
        self.0.push(PatchOperation::Replace {
            path: path.into(),
            value,
        });
        self
    }

    pub fn move_value(mut self, from: impl Into<String>, path: impl Into<String>) -> Self {
        self.0.push(PatchOperation::Move {
            from: from.into(),
            path: path.into(),
        });
        self
    }

    pub fn copy(mut self, from: impl Into<String>, path: impl Into<String>) -> Self {
        self.0.push(PatchOperation::Copy {
            from: from.into(),
            path: path.into(),
        });
        self
    }

    pub fn test(mut self, path: impl Into<String>, value: Value) -> Self {
        self.0.push(PatchOperation::Test {
            path: path.into(),
            value,
        });
        self
    }

    pub fn operations(&self) -> &[PatchOperation] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Top-level patch turning the `before` property bag into `after`
    ///
    /// Keys starting with `$` are reserved and never patched. Changed values
    /// are replaced wholesale; nested objects are not diffed.
    pub fn diff(before: &WireObject, after: &WireObject) -> Self {
        let mut patch = JsonPatch::new();
        for (key, old) in before {
            if key.starts_with('$') {
                continue;
            }
            let path = format!("/{}", escape_pointer_token(key));
            match after.get(key) {
                None => patch = patch.remove(path),
                Some(new) if new != old => patch = patch.replace(path, new.clone()),
                Some(_) => {}
            }
        }
        for (key, new) in after {
            if key.starts_with('$') || before.contains_key(key) {
                continue;
            }
            patch = patch.add(format!("/{}", escape_pointer_token(key)), new.clone());
        }
        patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(value: Value) -> WireObject {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_operation_wire_shape() {
        let op: PatchOperation =
            serde_json::from_value(json!({"op": "move", "from": "/a", "path": "/b"})).unwrap();
        assert_eq!(
            op,
            PatchOperation::Move {
                from: "/a".to_string(),
                path: "/b".to_string()
            }
        );
        assert_eq!(op.path(), "/b");
    }

    #[test]
    fn test_diff_add_replace_remove() {
        let before = bag(json!({"$dtId": "a", "temperature": 20, "humidity": 40, "name": "x"}));
        let after = bag(json!({"$dtId": "b", "temperature": 21, "name": "x", "pressure": 1013}));
        let patch = JsonPatch::diff(&before, &after);

        assert_eq!(
            patch.operations(),
            &[
                PatchOperation::Replace {
                    path: "/temperature".to_string(),
                    value: json!(21)
                },
                PatchOperation::Remove {
                    path: "/humidity".to_string()
                },
                PatchOperation::Add {
                    path: "/pressure".to_string(),
                    value: json!(1013)
                },
            ]
        );
    }

    #[test]
    fn test_pointer_escaping() {
        assert_eq!(escape_pointer_token("a/b~c"), "a~1b~0c");
    }
}
