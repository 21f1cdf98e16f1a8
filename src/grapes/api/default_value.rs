use super::Record;
use crate::core::error::GrapeResult;
use crate::core::grape::Grape;
use async_trait::async_trait;
use serde_json::Value;

/// Fills `key` with a default when it is missing or null.
#[derive(Debug, Clone)]
pub struct DefaultValueGrape {
    key: String,
    default_value: Value,
}

impl DefaultValueGrape {
    pub fn new(key: impl Into<String>, default_value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            default_value: default_value.into(),
        }
    }
}

#[async_trait]
impl Grape<Record, Record> for DefaultValueGrape {
    async fn process(&self, input: Record) -> GrapeResult<Record> {
        let mut output = input;
        let slot = output.entry(self.key.clone()).or_insert(Value::Null);
        if slot.is_null() {
            *slot = self.default_value.clone();
        }
        Ok(output)
    }
}
