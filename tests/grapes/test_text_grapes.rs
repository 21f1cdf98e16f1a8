use grapes::grapes::{JsonParserGrape, SchemaValidatorGrape};
use grapes::{ErrorKind, Grape};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, PartialEq)]
struct Counter {
    count: i64,
}

#[tokio::test]
async fn json_parser_parses_valid_json() {
    let parser = JsonParserGrape::new();
    let value = parser.process(r#"{"foo": "bar"}"#.to_string()).await.unwrap();
    assert_eq!(value, json!({"foo": "bar"}));
}

#[tokio::test]
async fn json_parser_strips_markdown_code_blocks() {
    let parser = JsonParserGrape::new();
    let value = parser
        .process("```json\n{\"foo\": \"bar\"}\n```".to_string())
        .await
        .unwrap();
    assert_eq!(value, json!({"foo": "bar"}));
}

#[tokio::test]
async fn json_parser_strips_bare_fences() {
    let parser = JsonParserGrape::new();
    let value = parser.process("```\n[1, 2]\n```".to_string()).await.unwrap();
    assert_eq!(value, json!([1, 2]));
}

#[tokio::test]
async fn json_parser_fails_on_invalid_json() {
    let parser = JsonParserGrape::new();
    let err = parser.process("{foo: bar}".to_string()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Parse);
    assert!(err.message.starts_with("Failed to parse JSON: "));
}

#[tokio::test]
async fn json_parser_fails_on_empty_input() {
    let parser = JsonParserGrape::new();
    let err = parser.process("```json\n```".to_string()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Parse);
}

#[tokio::test]
async fn schema_validator_passes_matching_data() {
    let validator = SchemaValidatorGrape::<Counter>::new();
    let counter = validator.process(json!({"count": 123})).await.unwrap();
    assert_eq!(counter, Counter { count: 123 });
}

#[tokio::test]
async fn schema_validator_fails_non_matching_data() {
    let validator = SchemaValidatorGrape::<Counter>::new();
    let err = validator
        .process(json!({"count": "123"}))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(err.message.contains("Schema validation failed"));
}

#[tokio::test]
async fn schema_validator_reports_missing_fields() {
    let validator = SchemaValidatorGrape::<Counter>::new();
    let err = validator.process(json!({})).await.unwrap_err();
    assert!(err.message.contains("count"));
}
