//! Reference grapes for model-output cleanup.

pub mod api;
pub mod image;
pub mod text;

pub use api::{CastType, DefaultValueGrape, Record, RenameKeyGrape, TypeCastGrape};
pub use image::{AspectRatioGrape, ImageMetadata, MaxSizeGrape};
pub use text::{JsonParserGrape, Schema, SchemaValidatorGrape, SerdeSchema};
