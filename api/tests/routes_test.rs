//! Handler tests against the production router with a canned completion
//! client — no network, no live service.

use std::io::Cursor;
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::{Value, json};

use ai_llm_service::error_handler::{ProviderError, ProviderErrorKind};
use ai_llm_service::{AiLlmError, ChatCompletion, ChatMessage};
use api::AppState;

/// Completion client returning one canned reply, or failing when `None`.
struct CannedChat {
    response: Option<String>,
}

#[async_trait]
impl ChatCompletion for CannedChat {
    async fn chat(&self, _messages: &[ChatMessage], _temperature: f32) -> Result<String, AiLlmError> {
        match &self.response {
            Some(text) => Ok(text.clone()),
            None => Err(ProviderError::new(ProviderErrorKind::EmptyChoices).into()),
        }
    }
}

fn server_with(response: Option<&str>) -> TestServer {
    let llm = Arc::new(CannedChat {
        response: response.map(str::to_string),
    });
    let state = AppState::new(llm, "gpt-4o-mini");
    TestServer::new(api::router(state)).unwrap()
}

fn png_bytes() -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    image::DynamicImage::new_rgb8(1, 1)
        .write_to(&mut buffer, image::ImageFormat::Png)
        .unwrap();
    buffer.into_inner()
}

#[tokio::test]
async fn health_reports_ok_and_model() {
    let server = server_with(Some("unused"));
    let response = server.get("/health").await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model"], "gpt-4o-mini");
}

#[tokio::test]
async fn extract_menu_without_files_is_bad_request() {
    let server = server_with(Some("[]"));
    let response = server
        .post("/extract_menu")
        .multipart(MultipartForm::new())
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn extract_menu_rejects_undecodable_image() {
    let server = server_with(Some("[]"));
    let part = Part::bytes(b"not an image".to_vec())
        .file_name("menu.png")
        .mime_type("image/png");
    let response = server
        .post("/extract_menu")
        .multipart(MultipartForm::new().add_part("files", part))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn extract_menu_returns_structured_dishes() {
    let server = server_with(Some(
        r#"[{"name":"Soup","description":"Hot","price":"$5"}]"#,
    ));
    let part = Part::bytes(png_bytes())
        .file_name("menu.png")
        .mime_type("image/png");
    let response = server
        .post("/extract_menu")
        .multipart(MultipartForm::new().add_part("files", part))
        .await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["dishes"][0]["name"], "Soup");
    assert_eq!(body["dishes"][0]["price"], "$5");
}

#[tokio::test]
async fn extract_menu_degrades_to_empty_dishes_on_upstream_failure() {
    let server = server_with(None);
    let part = Part::bytes(png_bytes())
        .file_name("menu.png")
        .mime_type("image/png");
    let response = server
        .post("/extract_menu")
        .multipart(MultipartForm::new().add_part("files", part))
        .await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["dishes"], json!([]));
}

#[tokio::test]
async fn next_question_returns_question() {
    let server = server_with(Some("Would you prefer a vegetarian option?"));
    let response = server
        .post("/next_question")
        .json(&json!({
            "dishes": [{"name": "Pasta", "description": "Italian dish"}],
            "qa": ["What cuisine do you prefer?", "I like Italian"],
            "language": "English"
        }))
        .await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["question"], "Would you prefer a vegetarian option?");
}

#[tokio::test]
async fn next_question_with_empty_dishes_is_bad_request() {
    let server = server_with(Some("unused"));
    let response = server
        .post("/next_question")
        .json(&json!({"dishes": [], "qa": [], "language": "English"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn recommend_returns_recommendations() {
    let server = server_with(Some("1. Pasta - Perfect Italian dish for pasta lovers."));
    let response = server
        .post("/recommend")
        .json(&json!({
            "dishes": [{"name": "Pasta", "description": "Italian dish", "price": "$12.99"}],
            "qa": ["Do you like Italian food?", "Yes, I love it!"],
            "language": "English"
        }))
        .await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(
        body["recommendations"],
        "1. Pasta - Perfect Italian dish for pasta lovers."
    );
}

#[tokio::test]
async fn recommend_with_empty_dishes_is_bad_request() {
    let server = server_with(Some("unused"));
    let response = server
        .post("/recommend")
        .json(&json!({"dishes": [], "qa": [], "language": "English"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn recommend_maps_upstream_failure_to_bad_gateway() {
    let server = server_with(None);
    let response = server
        .post("/recommend")
        .json(&json!({
            "dishes": [{"name": "Pasta", "description": "Italian dish"}],
            "qa": [],
            "language": "English"
        }))
        .await;
    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["error"], "UPSTREAM_ERROR");
}
