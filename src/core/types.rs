use serde::{Serialize, Serializer};

/// Failure kind carried by every [`GrapeError`](crate::core::error::GrapeError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorKind {
    /// Base kind, also used for panics that carried no taxonomy error.
    #[default]
    Grape,
    /// Input could not be parsed into structured data.
    Parse,
    /// Input was structurally valid but failed a check.
    Validation,
    /// Collaborator-defined kind identified by its discriminant name.
    Custom(&'static str),
}

impl ErrorKind {
    /// Discriminant name callers can branch on.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Grape => "GrapeError",
            ErrorKind::Parse => "ParseError",
            ErrorKind::Validation => "ValidationError",
            ErrorKind::Custom(name) => name,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ErrorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
