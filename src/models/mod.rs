//! Models module for the SDK
//!
//! Defines the DTDL document model (interfaces, contents, schemas) and the
//! digital twin instance types exchanged with a digital twins service.
//! Every type converts to and from its wire form through
//! [`WireCodec`](crate::codec::WireCodec).

pub mod common;
pub mod content;
pub mod interface;
pub mod model_data;
pub mod page;
pub mod patch;
pub mod schema;
pub mod twin;

pub use common::{ElementMetadata, LocalizableString, OneOrMany};
pub use content::{Command, Component, Content, ContentKind, Property, Relationship, Telemetry};
pub use interface::{ContentSummary, DTDL_V3_CONTEXT, DTDL_V4_CONTEXT, Interface};
pub use model_data::ModelData;
pub use page::{Page, QueryResult};
pub use patch::{JsonPatch, PatchOperation};
pub use schema::{
    ArraySchema, EnumLiteral, EnumSchema, EnumValue, EnumValueSchema, MapKey, MapSchema,
    MapValue, ObjectField, ObjectSchema, PrimitiveSchema, Schema, UnknownPrimitiveSchema,
};
pub use twin::{
    BasicDigitalTwin, BasicDigitalTwinComponent, BasicRelationship, DigitalTwinMetadata,
    IncomingRelationship,
};
