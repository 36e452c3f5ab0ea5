//! End-to-end API flow: catalog → format → generate → save → print

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::{Value, json};
use slip_server::core::{Config, Server, ServerState};
use tower::ServiceExt;

async fn test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::from_env();
    config.data_dir = dir.path().to_string_lossy().into_owned();
    let state = ServerState::initialize(&config).await.unwrap();
    (Server::build_router(state), dir)
}

async fn request(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    let request = match body {
        Some(v) => builder.body(Body::from(v.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, value)
}

#[tokio::test]
async fn full_slip_lifecycle() {
    let (app, _dir) = test_app().await;

    // catalog
    let (status, apple) = request(
        &app,
        "POST",
        "/api/products",
        Some(json!({
            "name": "Apple", "unit": "kg", "base_price": 2.0, "max_price": 4.0,
            "category": "fruit"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let apple_id = apple["id"].as_str().unwrap().to_string();

    let (status, milk) = request(
        &app,
        "POST",
        "/api/products",
        Some(json!({
            "name": "Milk", "unit": "pack", "base_price": 1.5, "max_price": 3.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let milk_id = milk["id"].as_str().unwrap().to_string();

    // format
    let (status, format) = request(
        &app,
        "POST",
        "/api/formats",
        Some(json!({
            "name": "Grocery",
            "template_html": "<div class=\"receipt\"><h1>{{store_name}}</h1>{{items}}<p>TOTAL {{currency_symbol}}{{total}}</p></div>",
            "store_name": "Acme",
            "currency_symbol": "Rs"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let format_id = format["id"].as_str().unwrap().to_string();

    // generate
    let (status, batch) = request(
        &app,
        "POST",
        "/api/slips/generate",
        Some(json!({
            "format_id": format_id,
            "start_date": "2025-03-01",
            "end_date": "2025-03-31",
            "count": 3,
            "items": [
                { "product_id": apple_id, "quantity": 2 },
                { "product_id": milk_id, "quantity": null }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let slips = batch.as_array().unwrap();
    assert_eq!(slips.len(), 3);
    for slip in slips {
        assert_eq!(slip["items_count"], 2);
        assert_eq!(slip["serial_number"].as_str().unwrap().len(), 11);
    }

    // save
    let (status, saved) = request(
        &app,
        "POST",
        "/api/slips",
        Some(json!({ "user_id": "u-1", "slips": slips })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let saved = saved.as_array().unwrap();
    assert_eq!(saved.len(), 3);
    assert!(saved.iter().all(|s| s["status"] == "generated"));
    let first_id = saved[0]["id"].as_str().unwrap().to_string();

    // list + filter
    let (status, listed) = request(&app, "GET", "/api/slips?status=generated", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 3);

    // status update
    let (status, updated) = request(
        &app,
        "PUT",
        &format!("/api/slips/{first_id}/status"),
        Some(json!({ "status": "printed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "printed");

    // print
    let (status, doc) = request(
        &app,
        "POST",
        "/api/slips/print",
        Some(json!({ "format_id": format["id"], "slips": slips })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let html = doc.as_str().unwrap();
    assert!(html.starts_with("<html>"));
    assert_eq!(html.matches("Acme").count(), 3);

    // stats
    let (status, stats) = request(&app, "GET", "/api/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["products"], 2);
    assert_eq!(stats["slips"], 3);
    assert_eq!(stats["items"], 6);
    assert_eq!(stats["recent_slips"], 3);

    // delete slip
    let (status, _) = request(&app, "DELETE", &format!("/api/slips/{first_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = request(&app, "GET", &format!("/api/slips/{first_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn validation_and_error_envelope() {
    let (app, _dir) = test_app().await;

    // inverted price band
    let (status, body) = request(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "name": "Bad", "unit": "kg", "base_price": 5.0, "max_price": 2.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
    assert!(body["message"].as_str().unwrap().contains("base_price"));

    // unknown format on generate
    let (status, body) = request(
        &app,
        "POST",
        "/api/slips/generate",
        Some(json!({
            "format_id": "missing",
            "start_date": "2025-03-01",
            "end_date": "2025-03-02",
            "count": 1,
            "items": [{ "product_id": "p", "quantity": 1 }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");

    // missing resource 404s
    let (status, _) = request(&app, "GET", "/api/products/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = request(&app, "DELETE", "/api/formats/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn format_preview_renders_sample() {
    let (app, _dir) = test_app().await;

    let (_, format) = request(
        &app,
        "POST",
        "/api/formats",
        Some(json!({
            "name": "Preview",
            "template_html": "<h1>{{store_name}}</h1>{{items}}",
            "store_name": "Acme"
        })),
    )
    .await;
    let id = format["id"].as_str().unwrap();

    let (status, body) = request(&app, "POST", &format!("/api/formats/{id}/preview"), None).await;
    assert_eq!(status, StatusCode::OK);
    let html = body.as_str().unwrap();
    assert!(html.contains("<h1>Acme</h1>"));
    assert!(html.contains("Sample Item A"));
}

#[tokio::test]
async fn product_soft_delete_hides_from_active_listing() {
    let (app, _dir) = test_app().await;

    let (_, product) = request(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "name": "Apple", "unit": "kg", "base_price": 1.0, "max_price": 2.0 })),
    )
    .await;
    let id = product["id"].as_str().unwrap();

    let (status, _) = request(&app, "DELETE", &format!("/api/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, active) = request(&app, "GET", "/api/products?active_only=true", None).await;
    assert!(active.as_array().unwrap().is_empty());
    let (_, all) = request(&app, "GET", "/api/products", None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}
