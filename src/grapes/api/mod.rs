//! Field-level cleanup grapes for JSON objects.

mod default_value;
mod rename_key;
mod type_cast;

pub use default_value::DefaultValueGrape;
pub use rename_key::RenameKeyGrape;
pub use type_cast::{CastType, TypeCastGrape};

/// Key-value mapping the api grapes operate on.
pub type Record = serde_json::Map<String, serde_json::Value>;
