use grapes::grapes::{CastType, DefaultValueGrape, Record, RenameKeyGrape, TypeCastGrape};
use grapes::Grape;
use serde_json::{json, Value};

fn record(value: Value) -> Record {
    value.as_object().cloned().expect("object literal")
}

#[tokio::test]
async fn rename_key_moves_value() {
    let grape = RenameKeyGrape::new("old", "new");
    let output = grape
        .process(record(json!({"old": 1, "other": 2})))
        .await
        .unwrap();
    assert_eq!(output, record(json!({"new": 1, "other": 2})));
    assert!(output.get("old").is_none());
}

#[tokio::test]
async fn type_cast_string_to_number() {
    let grape = TypeCastGrape::new("val", CastType::Number);
    let output = grape.process(record(json!({"val": "123"}))).await.unwrap();
    assert_eq!(output["val"], json!(123));
}

#[tokio::test]
async fn type_cast_number_to_string() {
    let grape = TypeCastGrape::new("val", CastType::String);
    let output = grape.process(record(json!({"val": 123}))).await.unwrap();
    assert_eq!(output["val"], json!("123"));
}

#[tokio::test]
async fn type_cast_keeps_non_numeric_value() {
    let grape = TypeCastGrape::new("val", CastType::Number);
    let output = grape
        .process(record(json!({"val": "twelve"})))
        .await
        .unwrap();
    assert_eq!(output["val"], json!("twelve"));
}

#[tokio::test]
async fn default_value_applies_when_missing() {
    let grape = DefaultValueGrape::new("status", "active");
    let output = grape.process(Record::new()).await.unwrap();
    assert_eq!(output["status"], json!("active"));
}

#[tokio::test]
async fn default_value_does_not_override_existing() {
    let grape = DefaultValueGrape::new("status", "active");
    let output = grape
        .process(record(json!({"status": "pending"})))
        .await
        .unwrap();
    assert_eq!(output["status"], json!("pending"));
}
