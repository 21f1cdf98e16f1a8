use grapes::grapes::{
    AspectRatioGrape, CastType, DefaultValueGrape, ImageMetadata, JsonParserGrape, MaxSizeGrape,
    Record, RenameKeyGrape, SchemaValidatorGrape, TypeCastGrape,
};
use grapes::{ErrorKind, Pipeline};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize, PartialEq)]
struct User {
    id: f64,
    username: String,
    active: bool,
}

fn user_pipeline() -> Pipeline<String, User> {
    Pipeline::<String>::new()
        .add(JsonParserGrape::new())
        .add(SchemaValidatorGrape::<User>::new())
}

#[tokio::test]
async fn fenced_json_is_parsed_and_validated() {
    let input = "```json\n{\"id\":123,\"username\":\"u\",\"active\":true}\n```".to_string();
    let user = user_pipeline().run(input).await.unwrap();
    assert_eq!(
        user,
        User {
            id: 123.0,
            username: "u".to_string(),
            active: true,
        }
    );
}

#[tokio::test]
async fn schema_mismatch_is_a_validation_failure() {
    let input = r#"{"id":"not_a_number","username":"u"}"#.to_string();
    let err = user_pipeline().run(input).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(err.message.contains("Schema validation failed"));
}

#[tokio::test]
async fn malformed_json_stops_at_the_parser() {
    let input = r#"{"id":123, username" }"#.to_string();
    let err = user_pipeline().run(input).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Parse);
    assert_eq!(err.name(), "ParseError");
}

#[tokio::test]
async fn max_size_clamps_through_a_pipeline() {
    let pipeline = Pipeline::<ImageMetadata>::new().add(MaxSizeGrape::new(50, 50));
    let output = pipeline
        .run(ImageMetadata::new(100, 20, "png"))
        .await
        .unwrap();
    assert_eq!(output, ImageMetadata::new(50, 20, "png"));
}

#[tokio::test]
async fn image_checks_run_after_clamping() {
    let pipeline = Pipeline::<ImageMetadata>::new()
        .add(MaxSizeGrape::new(1000, 1000))
        .add(AspectRatioGrape::new(1.0));

    let err = pipeline
        .run(ImageMetadata::new(4000, 3000, "jpeg"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn model_output_cleanup_chain() {
    let pipeline = Pipeline::<String>::new()
        .add(JsonParserGrape::new())
        .add(SchemaValidatorGrape::<Record>::new())
        .add(RenameKeyGrape::new("user_name", "username"))
        .add(TypeCastGrape::new("age", CastType::Number))
        .add(DefaultValueGrape::new("role", "member"));

    let output = pipeline
        .run("```json\n{\"user_name\": \"ada\", \"age\": \"36\"}\n```".to_string())
        .await
        .unwrap();

    assert_eq!(
        Value::Object(output),
        json!({"username": "ada", "age": 36, "role": "member"})
    );
    assert_eq!(
        pipeline.grape_names(),
        vec![
            "JsonParserGrape",
            "SchemaValidatorGrape",
            "RenameKeyGrape",
            "TypeCastGrape",
            "DefaultValueGrape",
        ]
    );
}

#[tokio::test]
async fn non_object_json_cannot_enter_record_grapes() {
    let pipeline = Pipeline::<String>::new()
        .add(JsonParserGrape::new())
        .add(SchemaValidatorGrape::<Record>::new())
        .add(DefaultValueGrape::new("role", "member"));

    let err = pipeline.run("[1, 2, 3]".to_string()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}
