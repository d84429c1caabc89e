//! Error types for the wire codec

use thiserror::Error;

/// Coarse classification of a [`DecodeError`]
///
/// Lets callers decide whether to skip a malformed entity and keep going
/// or abort the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    /// A required key such as `@id` or `name` is absent
    MissingField,
    /// A key is present but carries the wrong JSON type
    TypeMismatch,
    /// A key has the right JSON type but a value outside its domain
    InvalidValue,
}

/// Errors that can occur while decoding a wire value into a typed model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// A required key is absent (or null)
    #[error("{entity}: missing required field '{field}'")]
    MissingField { entity: &'static str, field: String },

    /// A key holds the wrong JSON type
    #[error("{entity}: field '{field}' expected {expected}, found {found}")]
    TypeMismatch {
        entity: &'static str,
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The entity itself is not a JSON object
    #[error("{entity}: expected a JSON object, found {found}")]
    NotAnObject {
        entity: &'static str,
        found: &'static str,
    },

    /// A key holds a value the model cannot accept
    #[error("{entity}: invalid value for '{field}': {reason}")]
    InvalidValue {
        entity: &'static str,
        field: String,
        reason: String,
    },
}

impl DecodeError {
    /// Classify this error
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::MissingField { .. } => DecodeErrorKind::MissingField,
            DecodeError::TypeMismatch { .. } | DecodeError::NotAnObject { .. } => {
                DecodeErrorKind::TypeMismatch
            }
            DecodeError::InvalidValue { .. } => DecodeErrorKind::InvalidValue,
        }
    }

    /// Prefix the offending field with the path of the enclosing field
    ///
    /// Nested decoders report fields relative to their own object; the caller
    /// uses this to turn `schema` into `mapValue.schema` and so on.
    pub fn within(self, parent: &str) -> Self {
        match self {
            DecodeError::MissingField { entity, field } => DecodeError::MissingField {
                entity,
                field: format!("{}.{}", parent, field),
            },
            DecodeError::TypeMismatch {
                entity,
                field,
                expected,
                found,
            } => DecodeError::TypeMismatch {
                entity,
                field: format!("{}.{}", parent, field),
                expected,
                found,
            },
            DecodeError::NotAnObject { entity, found } => DecodeError::TypeMismatch {
                entity,
                field: parent.to_string(),
                expected: "object",
                found,
            },
            DecodeError::InvalidValue {
                entity,
                field,
                reason,
            } => DecodeError::InvalidValue {
                entity,
                field: format!("{}.{}", parent, field),
                reason,
            },
        }
    }
}

/// Result alias used by every decoder in the crate
pub type DecodeResult<T> = Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let missing = DecodeError::MissingField {
            entity: "Interface",
            field: "@id".to_string(),
        };
        assert_eq!(missing.kind(), DecodeErrorKind::MissingField);

        let not_object = DecodeError::NotAnObject {
            entity: "Interface",
            found: "string",
        };
        assert_eq!(not_object.kind(), DecodeErrorKind::TypeMismatch);
    }

    #[test]
    fn test_within_prefixes_field_path() {
        let err = DecodeError::MissingField {
            entity: "MapValue",
            field: "schema".to_string(),
        }
        .within("mapValue");
        assert_eq!(
            err,
            DecodeError::MissingField {
                entity: "MapValue",
                field: "mapValue.schema".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "MapValue: missing required field 'mapValue.schema'"
        );
    }

    #[test]
    fn test_within_turns_not_an_object_into_mismatch() {
        let err = DecodeError::NotAnObject {
            entity: "MapKey",
            found: "array",
        }
        .within("mapKey");
        assert_eq!(err.kind(), DecodeErrorKind::TypeMismatch);
        assert!(err.to_string().contains("'mapKey'"));
    }
}
