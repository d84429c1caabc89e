//! DTDL SDK - Typed Digital Twins Definition Language documents
//!
//! Provides:
//! - A typed model of DTDL interfaces, contents and schemas
//! - A lossless JSON-LD codec: unknown kinds and keys survive a round trip
//! - Digital twin instance and service envelope types
//! - Document import/export and non-fatal validation passes

pub mod cli;
pub mod codec;
pub mod export;
pub mod import;
pub mod models;
pub mod validation;

// Re-export the codec surface
pub use codec::{DecodeError, DecodeErrorKind, DecodeResult, WireCodec, WireObject};

pub use import::{ImportConfig, ImportError, ImportResult, ModelImporter};
pub use export::{ExportError, ExportResult, ModelExporter};
pub use validation::{IdentifierValidator, NameValidator, ValidationReport, is_valid_dtmi};

// Re-export models
pub use models::{
    ArraySchema, BasicDigitalTwin, BasicDigitalTwinComponent, BasicRelationship, Command,
    Component, Content, ContentKind, DigitalTwinMetadata, EnumSchema, EnumValue,
    IncomingRelationship, Interface, JsonPatch, LocalizableString, MapSchema, ModelData,
    ObjectSchema, OneOrMany, Page, PrimitiveSchema, Property, Relationship, Schema, Telemetry,
};
