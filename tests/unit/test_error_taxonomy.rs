use grapes::{ErrorKind, GrapeError};
use std::collections::HashSet;

#[test]
fn test_constructors_set_kind_and_message() {
    let cases = vec![
        (GrapeError::generic("m"), ErrorKind::Grape, "GrapeError"),
        (GrapeError::parse("m"), ErrorKind::Parse, "ParseError"),
        (GrapeError::validation("m"), ErrorKind::Validation, "ValidationError"),
        (
            GrapeError::custom("SchemaMismatchError", "m"),
            ErrorKind::Custom("SchemaMismatchError"),
            "SchemaMismatchError",
        ),
    ];

    for (error, kind, name) in cases {
        assert_eq!(error.kind(), kind);
        assert_eq!(error.name(), name);
        assert_eq!(error.message, "m");
        assert!(error.context.is_empty());
        assert!(error.source.is_none());
        assert!(error.occurred_at <= chrono::Utc::now());
    }
}

#[test]
fn test_codes_identify_instances() {
    let codes: HashSet<String> = (0..100)
        .map(|_| GrapeError::validation("same message").code)
        .collect();
    assert_eq!(codes.len(), 100);
}

#[test]
fn test_with_source_exposes_cause() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
    let error = GrapeError::with_source(ErrorKind::Parse, "could not read input", Box::new(io));

    let source = std::error::Error::source(&error).expect("source");
    assert_eq!(source.to_string(), "missing.json");
    assert_eq!(error.to_string(), "ParseError: could not read input");
}

#[test]
fn test_branching_on_discriminant_without_knowing_kinds() {
    let errors = [
        GrapeError::parse("a"),
        GrapeError::custom("RatioMismatchError", "b"),
        GrapeError::validation("c"),
    ];
    let names: Vec<&str> = errors.iter().map(GrapeError::name).collect();
    assert_eq!(names, vec!["ParseError", "RatioMismatchError", "ValidationError"]);
    assert!(errors[2].is(ErrorKind::Validation));
    assert!(!errors[0].is(ErrorKind::Validation));
}
