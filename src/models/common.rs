//! Building blocks shared by every DTDL element
//!
//! - [`LocalizableString`]: `displayName` / `description` values
//! - [`OneOrMany`]: `@type`, `@context` and `extends`, which accept a single
//!   string or a list of strings
//! - [`ElementMetadata`]: the `@id`, `comment`, `displayName` and `description`
//!   keys carried by nearly every element

use std::fmt;

use serde_json::Value;

use crate::codec::wire::{field, insert_opt, mismatch, optional_str};
use crate::codec::{DecodeResult, WireObject};

/// A display string that is either plain text or localized per language code
///
/// # Example
///
/// ```rust
/// use dtdl_sdk::models::LocalizableString;
///
/// let plain = LocalizableString::from("Room");
/// assert_eq!(plain.text(), Some("Room"));
///
/// let localized = LocalizableString::localized([("en", "Room"), ("nl", "Kamer")]);
/// assert_eq!(localized.get("nl"), Some("Kamer"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalizableString {
    /// A single string, valid for every language
    Text(String),
    /// `(language, text)` pairs in document order, one per language code
    Localized(Vec<(String, String)>),
}

impl LocalizableString {
    /// Build a localized value from `(language, text)` pairs
    pub fn localized<L, T>(entries: impl IntoIterator<Item = (L, T)>) -> Self
    where
        L: Into<String>,
        T: Into<String>,
    {
        let mut pairs: Vec<(String, String)> = Vec::new();
        for (lang, text) in entries {
            set_language(&mut pairs, lang.into(), text.into());
        }
        LocalizableString::Localized(pairs)
    }

    /// Text for a specific language; plain text matches every language
    pub fn get(&self, language: &str) -> Option<&str> {
        match self {
            LocalizableString::Text(text) => Some(text),
            LocalizableString::Localized(pairs) => lookup(pairs, language),
        }
    }

    /// Best-effort single text: the plain value, else English, else the first entry
    pub fn text(&self) -> Option<&str> {
        match self {
            LocalizableString::Text(text) => Some(text),
            LocalizableString::Localized(pairs) => lookup(pairs, "en")
                .or_else(|| pairs.first().map(|(_, text)| text.as_str())),
        }
    }

    pub(crate) fn decode(value: &Value, entity: &'static str, key: &str) -> DecodeResult<Self> {
        match value {
            Value::String(text) => Ok(LocalizableString::Text(text.clone())),
            Value::Object(map) => {
                let mut localized = Vec::with_capacity(map.len());
                for (lang, text) in map {
                    let text = text.as_str().ok_or_else(|| {
                        mismatch(entity, &format!("{}.{}", key, lang), "string", text)
                    })?;
                    localized.push((lang.clone(), text.to_string()));
                }
                Ok(LocalizableString::Localized(localized))
            }
            other => Err(mismatch(entity, key, "string or language map", other)),
        }
    }

    pub(crate) fn decode_field(
        obj: &WireObject,
        key: &str,
        entity: &'static str,
    ) -> DecodeResult<Option<Self>> {
        field(obj, key)
            .map(|value| Self::decode(value, entity, key))
            .transpose()
    }

    /// Wire form: a JSON string or an object of strings
    pub fn to_value(&self) -> Value {
        match self {
            LocalizableString::Text(text) => Value::String(text.clone()),
            LocalizableString::Localized(pairs) => Value::Object(
                pairs
                    .iter()
                    .map(|(lang, text)| (lang.clone(), Value::String(text.clone())))
                    .collect(),
            ),
        }
    }
}

fn lookup<'a>(pairs: &'a [(String, String)], language: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(lang, _)| lang == language)
        .map(|(_, text)| text.as_str())
}

/// Replace the text of an existing language in place, else append
fn set_language(pairs: &mut Vec<(String, String)>, lang: String, text: String) {
    match pairs.iter_mut().find(|(existing, _)| *existing == lang) {
        Some(entry) => entry.1 = text,
        None => pairs.push((lang, text)),
    }
}

impl From<&str> for LocalizableString {
    fn from(text: &str) -> Self {
        LocalizableString::Text(text.to_string())
    }
}

impl From<String> for LocalizableString {
    fn from(text: String) -> Self {
        LocalizableString::Text(text)
    }
}

impl From<LocalizableString> for Value {
    fn from(value: LocalizableString) -> Self {
        value.to_value()
    }
}

/// A value that the wire format allows as a single string or a list of strings
///
/// The original shape is kept so that `"Interface"` and `["Interface"]` each
/// re-encode exactly as they were decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Whether `tag` is the single value or one of the listed values
    pub fn contains(&self, tag: &str) -> bool {
        self.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            OneOrMany::One(value) => std::slice::from_ref(value),
            OneOrMany::Many(values) => values,
        };
        slice.iter().map(String::as_str)
    }

    pub fn first(&self) -> Option<&str> {
        self.iter().next()
    }

    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn decode(value: &Value, entity: &'static str, key: &str) -> DecodeResult<Self> {
        match value {
            Value::String(s) => Ok(OneOrMany::One(s.clone())),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        mismatch(entity, &format!("{}[{}]", key, i), "string", item)
                    })
                })
                .collect::<DecodeResult<Vec<String>>>()
                .map(OneOrMany::Many),
            other => Err(mismatch(entity, key, "string or array of strings", other)),
        }
    }

    pub(crate) fn decode_field(
        obj: &WireObject,
        key: &str,
        entity: &'static str,
    ) -> DecodeResult<Option<Self>> {
        field(obj, key)
            .map(|value| Self::decode(value, entity, key))
            .transpose()
    }

    pub fn to_value(&self) -> Value {
        match self {
            OneOrMany::One(value) => Value::String(value.clone()),
            OneOrMany::Many(values) => {
                Value::Array(values.iter().cloned().map(Value::String).collect())
            }
        }
    }
}

impl fmt::Display for OneOrMany {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OneOrMany::One(value) => write!(f, "{}", value),
            OneOrMany::Many(values) => write!(f, "[{}]", values.join(", ")),
        }
    }
}

impl From<&str> for OneOrMany {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl From<String> for OneOrMany {
    fn from(value: String) -> Self {
        OneOrMany::One(value)
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(values: Vec<String>) -> Self {
        OneOrMany::Many(values)
    }
}

impl From<Vec<&str>> for OneOrMany {
    fn from(values: Vec<&str>) -> Self {
        OneOrMany::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<OneOrMany> for Value {
    fn from(value: OneOrMany) -> Self {
        value.to_value()
    }
}

/// Read `@type` for dispatch purposes
///
/// Malformed tags are treated like missing ones so the caller falls back to a
/// raw variant instead of failing.
pub(crate) fn dispatch_tags(obj: &WireObject) -> Option<OneOrMany> {
    field(obj, "@type").and_then(|value| OneOrMany::decode(value, "@type", "@type").ok())
}

/// Read `@type` for a typed element, defaulting when absent
pub(crate) fn type_tag_or(
    obj: &WireObject,
    entity: &'static str,
    default: &str,
) -> DecodeResult<OneOrMany> {
    Ok(OneOrMany::decode_field(obj, "@type", entity)?.unwrap_or_else(|| default.into()))
}

/// `@id`, `comment`, `displayName` and `description`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementMetadata {
    /// Element identifier (`@id`), usually a DTMI
    pub id: Option<String>,
    /// Free-form note for model authors
    pub comment: Option<String>,
    pub display_name: Option<LocalizableString>,
    pub description: Option<LocalizableString>,
}

impl ElementMetadata {
    pub(crate) fn decode(obj: &WireObject, entity: &'static str) -> DecodeResult<Self> {
        Ok(Self {
            id: optional_str(obj, "@id", entity)?,
            comment: optional_str(obj, "comment", entity)?,
            display_name: LocalizableString::decode_field(obj, "displayName", entity)?,
            description: LocalizableString::decode_field(obj, "description", entity)?,
        })
    }

    /// Write `@id` (normally placed first)
    pub(crate) fn encode_id(&self, obj: &mut WireObject) {
        insert_opt(obj, "@id", self.id.clone());
    }

    /// Write `comment`, `displayName` and `description`
    pub(crate) fn encode_descriptive(&self, obj: &mut WireObject) {
        insert_opt(obj, "comment", self.comment.clone());
        insert_opt(obj, "displayName", self.display_name.clone());
        insert_opt(obj, "description", self.description.clone());
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.comment.is_none()
            && self.display_name.is_none()
            && self.description.is_none()
    }
}
