mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::{parse_body, TestApp};
use portfolio_server::contact::form::ContactForm;
use portfolio_server::contact::{HttpContactGateway, TemplateCategory};
use portfolio_server::models::ContactSubmission;
use portfolio_server::notify::NotificationLog;
use serde_json::json;
use std::sync::Arc;

const FUNCTION: &str = "/functions/v1/submit-contact";

async fn stored(app: &TestApp) -> Vec<ContactSubmission> {
    sqlx::query_as::<_, ContactSubmission>("SELECT * FROM contacts")
        .fetch_all(&app.pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_invalid_email_is_rejected() {
    let app = TestApp::new().await;
    let res = app
        .post_json(FUNCTION, &json!({"name": "A", "email": "bad-email", "message": "hi"}))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(parse_body(res).await["error"], "Invalid email format");
    assert!(stored(&app).await.is_empty());
}

#[tokio::test]
async fn test_missing_fields_are_rejected_first() {
    let app = TestApp::new().await;

    let res = app
        .post_json(FUNCTION, &json!({"name": "", "email": "a@b.com", "message": "hi"}))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(res).await["error"], "All fields are required");

    let res = app
        .post_json(FUNCTION, &json!({"name": "A", "email": "not-an-email"}))
        .await;
    assert_eq!(parse_body(res).await["error"], "All fields are required");
}

#[tokio::test]
async fn test_valid_submission_is_normalized_and_stored() {
    let app = TestApp::new().await;
    let res = app
        .post_json(
            FUNCTION,
            &json!({"name": "Ann", "email": "ANN@Example.com", "message": " hi "}),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::CONTENT_TYPE], "application/json");

    let body = parse_body(res).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Thank you for reaching out! I'll get back to you soon."
    );

    let rows = stored(&app).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(body["id"], rows[0].id.as_str());
    assert_eq!(rows[0].name, "Ann");
    assert_eq!(rows[0].email, "ann@example.com");
    assert_eq!(rows[0].message, "hi");
    assert_eq!(rows[0].status, "new");
}

#[tokio::test]
async fn test_duplicates_are_allowed() {
    let app = TestApp::new().await;
    let payload = json!({"name": "Ann", "email": "ann@example.com", "message": "hi"});
    for _ in 0..2 {
        assert_eq!(app.post_json(FUNCTION, &payload).await.status(), StatusCode::OK);
    }
    assert_eq!(stored(&app).await.len(), 2);
}

#[tokio::test]
async fn test_client_cannot_choose_status() {
    let app = TestApp::new().await;
    let res = app
        .post_json(
            FUNCTION,
            &json!({"name": "Ann", "email": "ann@example.com", "message": "hi", "status": "read"}),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(stored(&app).await[0].status, "new");
}

#[tokio::test]
async fn test_malformed_body_is_internal_error() {
    let app = TestApp::new().await;
    let res = app
        .send(
            Request::post(FUNCTION)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(parse_body(res).await["error"], "Internal server error");
}

#[tokio::test]
async fn test_store_failure_is_reported() {
    let app = TestApp::new().await;
    sqlx::query("DROP TABLE contacts")
        .execute(&app.pool)
        .await
        .unwrap();

    let res = app
        .post_json(FUNCTION, &json!({"name": "Ann", "email": "ann@example.com", "message": "hi"}))
        .await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(parse_body(res).await["error"], "Failed to save contact submission");
}

#[tokio::test]
async fn test_preflight_has_no_body_and_permissive_headers() {
    let app = TestApp::new().await;
    let res = app
        .send(
            Request::builder()
                .method(Method::OPTIONS)
                .uri(FUNCTION)
                .header(header::ORIGIN, "https://anywhere.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::from("ignored"))
                .unwrap(),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        res.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "authorization, x-client-info, apikey, content-type"
    );

    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_rendered_templates_endpoint() {
    let app = TestApp::new().await;
    let body = parse_body(app.get("/api/contact/templates?category=quick&name=Ann").await).await;
    let templates = body["data"]["templates"].as_array().unwrap();
    assert_eq!(templates.len(), 3);
    assert_eq!(templates[1]["name"], "Quick Connect");
    assert!(templates[1]["message"].as_str().unwrap().contains("Ann here."));
}

#[tokio::test]
async fn test_contact_form_round_trip_over_http() {
    let app = TestApp::new().await;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app.router.clone();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let url = format!("http://{}{}", addr, FUNCTION);
    let log = Arc::new(NotificationLog::default());
    let mut form = ContactForm::new(HttpContactGateway::new(url), log.clone());

    form.name = "Ann".into();
    form.email = "bad-email".into();
    form.category = TemplateCategory::Email;
    form.apply_template(1).unwrap();
    assert!(form.message.starts_with("Subject: Regarding Open Position"));

    assert!(form.submit().await.is_err());
    assert_eq!(form.email, "bad-email");
    assert_eq!(
        log.last().unwrap().description.as_deref(),
        Some("Invalid email format")
    );

    form.email = "Ann@Example.com".into();
    let receipt = form.submit().await.unwrap();
    assert!(receipt.success);
    assert!(form.message.is_empty());

    let rows = stored(&app).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, receipt.id);
    assert_eq!(rows[0].email, "ann@example.com");
}

#[tokio::test]
async fn test_linkedin_category_name_is_accepted() {
    let app = TestApp::new().await;
    let res = app.get("/api/contact/templates?category=linkedin&name=Ann").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["data"]["category"], "networking");
    assert_eq!(body["data"]["templates"][2]["name"], "Mentorship");
}
