use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use portfolio_server::{
    config::Config,
    models::content::SiteContent,
    routes::create_routes,
    state::AppState,
    store::{sqlite, SqliteContactStore, SqliteEventStore, Stores},
};
use serde_json::Value;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::sync::Arc;
use tower::ServiceExt;

pub const ADMIN_TOKEN: &str = "test-operator-token";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub stores: Stores,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        // One connection so every query sees the same in-memory database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open test db");
        sqlite::migrate(&pool).await.expect("Failed to migrate test db");

        let stores = Stores {
            events: Arc::new(SqliteEventStore::new(pool.clone())),
            contacts: Arc::new(SqliteContactStore::new(pool.clone())),
        };

        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            port: 0,
            admin_token: Some(ADMIN_TOKEN.to_string()),
            contact_function_url: "http://localhost/functions/v1/submit-contact".to_string(),
        };

        let content = SiteContent::embedded().expect("embedded content");
        let state = Arc::new(AppState::new(config, stores.clone(), content));

        Self {
            router: create_routes(state),
            pool,
            stores,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> Response {
        self.send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn admin(&self, method: &str, uri: &str, body: Option<&Value>) -> Response {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", ADMIN_TOKEN))
            .header(header::CONTENT_TYPE, "application/json");
        let body = body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty);
        self.send(builder.body(body).unwrap()).await
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
