use super::Record;
use crate::core::error::GrapeResult;
use crate::core::grape::Grape;
use async_trait::async_trait;

/// Moves the value stored under `old_key` to `new_key`; no-op when `old_key` is absent.
#[derive(Debug, Clone)]
pub struct RenameKeyGrape {
    old_key: String,
    new_key: String,
}

impl RenameKeyGrape {
    pub fn new(old_key: impl Into<String>, new_key: impl Into<String>) -> Self {
        Self {
            old_key: old_key.into(),
            new_key: new_key.into(),
        }
    }
}

#[async_trait]
impl Grape<Record, Record> for RenameKeyGrape {
    async fn process(&self, input: Record) -> GrapeResult<Record> {
        let mut output = input;
        if let Some(value) = output.remove(&self.old_key) {
            output.insert(self.new_key.clone(), value);
        }
        Ok(output)
    }
}
