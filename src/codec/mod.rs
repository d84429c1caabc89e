//! Wire codec infrastructure
//!
//! Every DTDL and twin-instance type in [`crate::models`] converts to and from
//! its JSON wire form through the [`WireCodec`] trait. The contract is that
//! `T::decode(&x.encode())` reproduces `x`, and that an optional field which was
//! absent on decode stays absent on encode (it is never written as `null`).

pub mod error;
pub mod wire;

pub use error::{DecodeError, DecodeErrorKind, DecodeResult};
pub use wire::WireObject;

use serde_json::Value;

/// Bidirectional mapping between a typed model value and its JSON wire form
pub trait WireCodec: Sized {
    /// Decode a wire value into the typed model
    fn decode(value: &Value) -> DecodeResult<Self>;

    /// Encode the typed model back into its wire value
    ///
    /// Encoding cannot fail for a value built through the public API.
    fn encode(&self) -> Value;

    /// Parse JSON text and decode it in one step
    fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(content)?;
        Self::decode(&value).map_err(serde::de::Error::custom)
    }
}

/// Implement `Serialize`/`Deserialize` for types whose wire form is owned by
/// their [`WireCodec`] implementation
macro_rules! impl_serde_via_codec {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $ty {
                fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serde::Serialize::serialize(
                        &<$ty as $crate::codec::WireCodec>::encode(self),
                        serializer,
                    )
                }
            }

            impl<'de> serde::Deserialize<'de> for $ty {
                fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                    <$ty as $crate::codec::WireCodec>::decode(&value)
                        .map_err(<D::Error as serde::de::Error>::custom)
                }
            }
        )+
    };
}

pub(crate) use impl_serde_via_codec;
