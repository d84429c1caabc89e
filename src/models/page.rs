//! Envelope of paginated list and query responses

use serde_json::Value;

use crate::codec::wire::{expect_object, field, insert_opt, mismatch, optional_str};
use crate::codec::{DecodeResult, WireCodec, WireObject, impl_serde_via_codec};

/// One page of results: a `value` array plus an optional continuation
///
/// Elements are kept as raw JSON; [`Page::decode_items`] converts them with a
/// [`WireCodec`] type and reports failures per element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub value: Vec<Value>,
    /// Absolute link to the next page (list endpoints)
    pub next_link: Option<String>,
    /// Opaque token for the next page (query endpoint)
    pub continuation_token: Option<String>,
}

/// Query responses share the page envelope
pub type QueryResult = Page;

impl Page {
    pub fn has_more(&self) -> bool {
        self.next_link.is_some() || self.continuation_token.is_some()
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Decode every element as `T`, keeping one result per element
    pub fn decode_items<T: WireCodec>(&self) -> Vec<DecodeResult<T>> {
        self.value.iter().map(T::decode).collect()
    }
}

impl WireCodec for Page {
    fn decode(value: &Value) -> DecodeResult<Self> {
        const ENTITY: &str = "Page";
        let obj = expect_object(value, ENTITY)?;
        let items = match field(obj, "value") {
            None => Vec::new(),
            Some(Value::Array(items)) => items.clone(),
            Some(other) => return Err(mismatch(ENTITY, "value", "array", other)),
        };
        Ok(Self {
            value: items,
            next_link: optional_str(obj, "nextLink", ENTITY)?,
            continuation_token: optional_str(obj, "continuationToken", ENTITY)?,
        })
    }

    fn encode(&self) -> Value {
        let mut obj = WireObject::new();
        obj.insert("value".to_string(), Value::Array(self.value.clone()));
        insert_opt(&mut obj, "nextLink", self.next_link.clone());
        insert_opt(&mut obj, "continuationToken", self.continuation_token.clone());
        Value::Object(obj)
    }
}

impl_serde_via_codec!(Page);
