use crate::core::types::ErrorKind;
use chrono::{DateTime, Utc};
use std::any::Any;
use std::collections::HashMap;

/// Success/failure envelope returned by every grape and by the pipeline.
pub type GrapeResult<T> = std::result::Result<T, GrapeError>;

const PANIC_FALLBACK_MESSAGE: &str = "grape panicked";

#[derive(Debug)]
pub struct GrapeError {
    pub kind: ErrorKind,
    pub code: String,
    pub message: String,
    pub context: HashMap<String, String>,
    pub occurred_at: DateTime<Utc>,
    pub source: Option<anyhow::Error>,
}

impl GrapeError {
    pub fn new<T: Into<String>>(kind: ErrorKind, message: T) -> Self {
        GrapeError {
            kind,
            code: format!("GRP-{}", uuid::Uuid::new_v4()),
            message: message.into(),
            context: HashMap::new(),
            occurred_at: Utc::now(),
            source: None,
        }
    }

    pub fn generic<T: Into<String>>(message: T) -> Self {
        Self::new(ErrorKind::Grape, message)
    }

    pub fn parse<T: Into<String>>(message: T) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Error of a collaborator-defined kind, e.g. `custom("RatioMismatchError", ..)`.
    pub fn custom<T: Into<String>>(name: &'static str, message: T) -> Self {
        Self::new(ErrorKind::Custom(name), message)
    }

    pub fn with_source<T: Into<String>>(
        kind: ErrorKind,
        message: T,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        let mut error = GrapeError::new(kind, message);
        error.source = Some(anyhow::anyhow!(source));
        error
    }

    pub fn with_context<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    pub fn with_code<T: Into<String>>(mut self, code: T) -> Self {
        self.code = code.into();
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Discriminant name, e.g. `"ValidationError"`.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Normalize a caught panic payload.
    ///
    /// A payload raised with `std::panic::panic_any(GrapeError)` is returned as is;
    /// textual payloads become the message of a new [`ErrorKind::Grape`] error.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<GrapeError>() {
            Ok(error) => *error,
            Err(payload) => {
                let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
                    (*text).to_string()
                } else if let Some(text) = payload.downcast_ref::<String>() {
                    text.clone()
                } else {
                    PANIC_FALLBACK_MESSAGE.to_string()
                };
                GrapeError::generic(message)
            }
        }
    }
}

impl std::fmt::Display for GrapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for GrapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| &**source as &(dyn std::error::Error + 'static))
    }
}

impl From<anyhow::Error> for GrapeError {
    fn from(e: anyhow::Error) -> Self {
        let mut error = GrapeError::generic(e.to_string());
        error.source = Some(e);
        error
    }
}
