use super::Record;
use crate::core::error::GrapeResult;
use crate::core::grape::Grape;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Target type for [`TypeCastGrape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastType {
    Number,
    String,
    Boolean,
}

/// Converts the value stored under `key` to the target type.
///
/// Never fails: a value that has no numeric reading is left as is when casting to
/// [`CastType::Number`], and a missing key is a no-op.
#[derive(Debug, Clone)]
pub struct TypeCastGrape {
    key: String,
    target: CastType,
}

impl TypeCastGrape {
    pub fn new(key: impl Into<String>, target: CastType) -> Self {
        Self {
            key: key.into(),
            target,
        }
    }
}

#[async_trait]
impl Grape<Record, Record> for TypeCastGrape {
    async fn process(&self, input: Record) -> GrapeResult<Record> {
        let mut output = input;
        let Some(value) = output.get_mut(&self.key) else {
            return Ok(output);
        };

        match self.target {
            CastType::Number => {
                if let Some(number) = to_number(value) {
                    *value = number;
                }
            }
            CastType::String => *value = Value::String(to_text(value)),
            CastType::Boolean => *value = Value::Bool(is_truthy(value)),
        }
        Ok(output)
    }
}

fn to_number(value: &Value) -> Option<Value> {
    match value {
        Value::Number(_) => Some(value.clone()),
        Value::Bool(flag) => Some(Value::from(i64::from(*flag))),
        Value::Null => Some(Value::from(0)),
        Value::String(text) => parse_number(text.trim()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn parse_number(text: &str) -> Option<Value> {
    if text.is_empty() {
        return Some(Value::from(0));
    }
    if let Ok(integer) = text.parse::<i64>() {
        return Some(Value::from(integer));
    }
    let float = text.parse::<f64>().ok().filter(|f| f.is_finite())?;
    if float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
        return Some(Value::from(float as i64));
    }
    Number::from_f64(float).map(Value::Number)
}

fn to_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
