/// HTTP round trips through the full route table.

use actix_web::{App, http::StatusCode, http::header, test, web};
use serde_json::{Value, json};

use deckhand::config::AppConfig;
use deckhand::handlers;
use deckhand::models::dispatch::DispatchPolicy;
use deckhand::state::AppState;
use deckhand::writer::DECK_CONTENT_TYPE;

mod common;
use common::setup_output_dir;

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(handlers::json_config(1024 * 1024))
                .configure(handlers::configure)
                .default_service(web::to(handlers::not_found)),
        )
        .await
    };
}

fn title_request() -> Value {
    json!({
        "type": "corporate",
        "config": {"organisation": "Acme"},
        "slides": [{"method": "createTitleSlide", "params": ["Hello", "World", "Sub"]}]
    })
}

#[actix_web::test]
async fn test_generate_download_delete_cycle() {
    let (_dir, out) = setup_output_dir();
    let app = app!(AppState::new(AppConfig::default(), out));

    let req = test::TestRequest::post()
        .uri("/api/presentations/generate")
        .set_json(title_request())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["slideCount"], 1);
    assert_eq!(body["warnings"], json!([]));
    let filename = body["filename"].as_str().expect("filename").to_string();
    assert!(filename.ends_with(".pptx"));
    assert_eq!(body["downloadUrl"], format!("/api/presentations/download/{filename}"));

    let req = test::TestRequest::get().uri("/api/presentations/list").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["presentations"][0]["filename"], filename.as_str());

    let req = test::TestRequest::get()
        .uri(&format!("/api/presentations/download/{filename}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some(DECK_CONTENT_TYPE)
    );
    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.starts_with("attachment"));
    let bytes = test::read_body(resp).await;
    assert_eq!(&bytes[..2], b"PK");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/presentations/delete/{filename}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/presentations/delete/{filename}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_generate_validation_errors() {
    let (_dir, out) = setup_output_dir();
    let app = app!(AppState::new(AppConfig::default(), out.clone()));

    let req = test::TestRequest::post()
        .uri("/api/presentations/generate")
        .set_json(json!({"type": "corporate"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/presentations/generate")
        .set_json(json!({"type": "brochure", "slides": []}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "UnknownPresentationType");

    let req = test::TestRequest::post()
        .uri("/api/presentations/generate")
        .set_json(json!({
            "type": "corporate",
            "slides": [{"method": "createTableSlide", "params": ["T", ["H1", "H2"], [["a", "b"], ["c", "d", "e"]]]}]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "MalformedTable");
    assert_eq!(body["details"]["index"], 0);
    assert_eq!(body["details"]["method"], "createTableSlide");

    assert_eq!(out.stats().expect("stats").presentation_count, 0);
}

#[actix_web::test]
async fn test_lenient_policy_reports_warnings() {
    let (_dir, out) = setup_output_dir();
    let config = AppConfig {
        dispatch_policy: DispatchPolicy::Lenient,
        ..AppConfig::default()
    };
    let app = app!(AppState::new(config, out));

    let req = test::TestRequest::post()
        .uri("/api/presentations/generate")
        .set_json(json!({
            "type": "corporate",
            "config": {},
            "slides": [
                {"method": "doesNotExist", "params": []},
                {"method": "createKeyMessages", "params": ["KM", ["one", "two"]]}
            ]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["slideCount"], 1);
    assert_eq!(body["warnings"][0]["method"], "doesNotExist");
}

#[actix_web::test]
async fn test_post_requires_json_content_type() {
    let (_dir, out) = setup_output_dir();
    let app = app!(AppState::new(AppConfig::default(), out));

    let req = test::TestRequest::post()
        .uri("/api/presentations/generate")
        .insert_header((header::CONTENT_TYPE, "text/plain"))
        .set_payload(title_request().to_string())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/presentations/generate")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "InvalidRequestBody");
}

#[actix_web::test]
async fn test_download_rejects_bad_and_missing_names() {
    let (_dir, out) = setup_output_dir();
    let app = app!(AppState::new(AppConfig::default(), out));

    let req = test::TestRequest::get().uri("/api/presentations/download/notes.txt").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/api/presentations/download/missing.pptx").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_cleanup_endpoint_uses_body_or_default() {
    let (_dir, out) = setup_output_dir();
    let app = app!(AppState::new(AppConfig::default(), out.clone()));

    let req = test::TestRequest::post()
        .uri("/api/presentations/generate")
        .set_json(title_request())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // A fresh file survives the default seven day window.
    let req = test::TestRequest::post()
        .uri("/api/presentations/cleanup")
        .set_json(json!({}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["deletedCount"], 0);
    assert_eq!(out.stats().expect("stats").presentation_count, 1);
}

#[actix_web::test]
async fn test_metadata_endpoints() {
    let (_dir, out) = setup_output_dir();
    let app = app!(AppState::new(AppConfig::default(), out));

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["service"], "deckhand");

    let req = test::TestRequest::get().uri("/api/presentations/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["presentationCount"], 0);

    let req = test::TestRequest::get().uri("/api/presentations/templates").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let templates = body["templates"].as_array().expect("templates");
    assert_eq!(templates.len(), 2);
    let investment = templates
        .iter()
        .find(|t| t["type"] == "investment")
        .expect("investment template");
    let methods: Vec<&str> = investment["methods"]
        .as_array()
        .expect("methods")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(methods.contains(&"createCaseStudy"));

    let req = test::TestRequest::get().uri("/no/such/route").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_cors_preflight_allows_any_origin_by_default() {
    let (_dir, out) = setup_output_dir();
    let config = AppConfig::default();
    let app = test::init_service(
        App::new()
            .wrap(handlers::cors(&config.cors_allowed_origins))
            .app_data(web::Data::new(AppState::new(config, out)))
            .configure(handlers::configure),
    )
    .await;

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/presentations/generate")
        .insert_header((header::ORIGIN, "https://chat.example"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[actix_web::test]
async fn test_cors_restricts_to_configured_origins() {
    let (_dir, out) = setup_output_dir();
    let config = AppConfig {
        cors_allowed_origins: vec!["https://app.example".to_string()],
        ..AppConfig::default()
    };
    let app = test::init_service(
        App::new()
            .wrap(handlers::cors(&config.cors_allowed_origins))
            .app_data(web::Data::new(AppState::new(config, out)))
            .configure(handlers::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((header::ORIGIN, "https://app.example"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("https://app.example")
    );

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/presentations/generate")
        .insert_header((header::ORIGIN, "https://elsewhere.example"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .to_request();
    match test::try_call_service(&app, req).await {
        Ok(resp) => {
            assert!(!resp.status().is_success());
            assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
        }
        Err(err) => assert!(err.as_response_error().status_code().is_client_error()),
    }
}

#[actix_web::test]
async fn test_cleanup_rejects_unreadable_body() {
    let (_dir, out) = setup_output_dir();
    let app = app!(AppState::new(AppConfig::default(), out.clone()));

    let req = test::TestRequest::post()
        .uri("/api/presentations/generate")
        .set_json(title_request())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    for body in [r#"{"maxAgeDays":"forever"}"#, r#"{"maxAgeDays":-2}"#, "{oops"] {
        let req = test::TestRequest::post()
            .uri("/api/presentations/cleanup")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "accepted {body}");
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["code"], "InvalidRequestBody");
    }

    // An empty body means the configured default.
    let req = test::TestRequest::post()
        .uri("/api/presentations/cleanup")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .to_request();
    let json: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(json["deletedCount"], 0);
    assert_eq!(out.stats().expect("stats").presentation_count, 1);
}

#[actix_web::test]
async fn test_cleanup_with_huge_age_deletes_nothing() {
    let (_dir, out) = setup_output_dir();
    let app = app!(AppState::new(AppConfig::default(), out.clone()));

    let req = test::TestRequest::post()
        .uri("/api/presentations/generate")
        .set_json(title_request())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/presentations/cleanup")
        .set_json(json!({"maxAgeDays": 4_000_000_000u32}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["deletedCount"], 0);
    assert_eq!(out.stats().expect("stats").presentation_count, 1);
}
