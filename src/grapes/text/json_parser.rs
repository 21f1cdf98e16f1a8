use crate::core::config::StageDefaults;
use crate::core::error::{GrapeError, GrapeResult};
use crate::core::grape::Grape;
use async_trait::async_trait;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

static CODE_FENCE: OnceLock<Regex> = OnceLock::new();

fn code_fence() -> &'static Regex {
    CODE_FENCE.get_or_init(|| {
        Regex::new(r"```json\n?|\n?```").expect("code fence pattern is a valid regex")
    })
}

/// Parses model output into JSON, tolerating markdown `json` code fences around it.
#[derive(Debug, Clone)]
pub struct JsonParserGrape {
    strip_code_fences: bool,
}

impl Default for JsonParserGrape {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonParserGrape {
    pub fn new() -> Self {
        Self {
            strip_code_fences: true,
        }
    }

    pub fn from_defaults(defaults: &StageDefaults) -> Self {
        Self {
            strip_code_fences: defaults.strip_code_fences,
        }
    }

    pub fn strip_code_fences(mut self, strip: bool) -> Self {
        self.strip_code_fences = strip;
        self
    }

    fn clean<'a>(&self, input: &'a str) -> std::borrow::Cow<'a, str> {
        if self.strip_code_fences {
            code_fence().replace_all(input, "")
        } else {
            std::borrow::Cow::Borrowed(input)
        }
    }
}

#[async_trait]
impl Grape<String, Value> for JsonParserGrape {
    async fn process(&self, input: String) -> GrapeResult<Value> {
        let cleaned = self.clean(&input);
        serde_json::from_str(cleaned.trim())
            .map_err(|err| GrapeError::parse(format!("Failed to parse JSON: {}", err)))
    }
}
