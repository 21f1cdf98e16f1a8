#![allow(clippy::result_large_err)] // GrapeError is returned unboxed across every grape.

//! Typed async pipelines of small processing stages ("grapes") for cleaning up
//! model-generated output.
//!
//! ```no_run
//! use grapes::grapes::{JsonParserGrape, SchemaValidatorGrape};
//! use grapes::Pipeline;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct User {
//!     id: u64,
//!     username: String,
//! }
//!
//! # async fn demo() {
//! let pipeline = Pipeline::<String>::new()
//!     .add(JsonParserGrape::new())
//!     .add(SchemaValidatorGrape::<User>::new());
//!
//! match pipeline.run(r#"{"id": 1, "username": "u"}"#.to_string()).await {
//!     Ok(user) => println!("{}: {}", user.id, user.username),
//!     Err(err) => eprintln!("{} ({})", err, err.code),
//! }
//! # }
//! ```

pub mod core;
pub mod grapes;
pub mod logging;

pub use crate::core::{ErrorKind, Grape, GrapeError, GrapeResult, Pipeline};

/// Current crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub type Result<T> = std::result::Result<T, anyhow::Error>;
