use crate::core::error::{GrapeError, GrapeResult};
use crate::core::grape::Grape;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;

/// Pluggable schema description: checks a JSON value and produces a typed value.
pub trait Schema<T>: Send + Sync + 'static {
    /// Returns a human-readable reason on mismatch.
    fn validate(&self, value: Value) -> Result<T, String>;
}

/// Schema backed by the serde shape of `T`.
pub struct SerdeSchema<T> {
    _target: PhantomData<fn() -> T>,
}

impl<T> Default for SerdeSchema<T> {
    fn default() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<T> Schema<T> for SerdeSchema<T>
where
    T: DeserializeOwned + 'static,
{
    fn validate(&self, value: Value) -> Result<T, String> {
        serde_json::from_value(value).map_err(|err| err.to_string())
    }
}

impl<T, F> Schema<T> for F
where
    F: Fn(Value) -> Result<T, String> + Send + Sync + 'static,
{
    fn validate(&self, value: Value) -> Result<T, String> {
        self(value)
    }
}

pub struct SchemaValidatorGrape<T, S = SerdeSchema<T>> {
    schema: S,
    _target: PhantomData<fn() -> T>,
}

impl<T> SchemaValidatorGrape<T, SerdeSchema<T>>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Validator for the serde shape of `T`.
    pub fn new() -> Self {
        Self::with_schema(SerdeSchema::default())
    }
}

impl<T> Default for SchemaValidatorGrape<T, SerdeSchema<T>>
where
    T: DeserializeOwned + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> SchemaValidatorGrape<T, S>
where
    S: Schema<T>,
{
    pub fn with_schema(schema: S) -> Self {
        Self {
            schema,
            _target: PhantomData,
        }
    }
}

#[async_trait]
impl<T, S> Grape<Value, T> for SchemaValidatorGrape<T, S>
where
    T: Send + 'static,
    S: Schema<T>,
{
    async fn process(&self, input: Value) -> GrapeResult<T> {
        self.schema.validate(input).map_err(|reason| {
            GrapeError::validation(format!("Schema validation failed: {}", reason))
        })
    }
}
