//! Grapes for turning raw model text into typed values.

mod json_parser;
mod schema_validator;

pub use json_parser::JsonParserGrape;
pub use schema_validator::{Schema, SchemaValidatorGrape, SerdeSchema};
