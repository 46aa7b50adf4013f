//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`], which builds an in-memory database with the
//! schema of the service under test and the matching router, plus small
//! helpers for driving requests through it with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use mg_db::migrations::Schema;
use mg_db::pool::{init_memory_pool, DbPool};
use mg_server::context::AppContext;
use mg_server::router::{cats_router, hello_router, people_router};

/// Test harness wrapping an [`AppContext`] backed by an in-memory database.
pub struct TestHarness {
    pub ctx: AppContext,
    pub db: DbPool,
}

impl TestHarness {
    /// Create a harness whose database carries `schema`.
    pub fn new(schema: Schema) -> Self {
        let db = init_memory_pool(schema).expect("failed to create in-memory pool");
        let ctx = AppContext::new(db.clone());
        Self { ctx, db }
    }

    pub fn cats() -> Self {
        Self::new(Schema::Cats)
    }

    pub fn people() -> Self {
        Self::new(Schema::People)
    }

    pub fn cats_app(&self) -> Router {
        cats_router(self.ctx.clone())
    }

    pub fn people_app(&self) -> Router {
        people_router(self.ctx.clone())
    }

    pub fn hello_app() -> Router {
        hello_router()
    }

    /// Connection for direct database assertions.
    pub fn conn(&self) -> mg_db::pool::PooledConnection {
        mg_db::pool::get_conn(&self.db).expect("failed to get connection")
    }
}

/// A collected response.
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is not JSON")
    }
}

/// Send `request` through `app` and collect the response.
pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> TestResponse {
    send(
        app,
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}
