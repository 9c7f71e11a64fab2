//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Liveness check
//! GET  /health/ready               - Readiness check (storage reachable)
//!
//! # Restaurant point-of-sale
//! GET  /api/products               - List products
//! POST /api/products               - Create product
//! GET  /api/orders                 - List POS orders
//! POST /api/orders                 - Create POS order
//! GET  /api/order_items            - List POS line items
//! POST /api/order_items            - Create POS line item
//! GET  /api/inventory              - List stock records
//! POST /api/inventory              - Create stock record
//! GET  /api/users                  - List staff users (no passwords)
//! POST /api/users                  - Create staff user
//!
//! # E-commerce
//! GET  /api/customers              - List customers
//! POST /api/customers              - Create customer
//! GET  /api/ecommerce_orders       - List web orders
//! POST /api/ecommerce_orders       - Create web order
//! GET  /api/ecommerce_order_items  - List web line items
//! POST /api/ecommerce_order_items  - Create web line item
//! ```
//!
//! Lists return `{"data": [...]}`; creates return the new row's id under a
//! key named for the entity (e.g. `{"product_id": 1}`).

pub mod customers;
pub mod ecommerce_orders;
pub mod health;
pub mod inventory;
pub mod orders;
pub mod products;
pub mod users;

use axum::{Router, routing::get};
use serde::Serialize;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::{cors_layer, request_id_middleware};
use crate::state::AppState;

/// Body of every list endpoint.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

/// Create the point-of-sale API routes router.
pub fn pos_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index).post(products::create))
        .route("/orders", get(orders::index).post(orders::create))
        .route(
            "/order_items",
            get(orders::index_items).post(orders::create_item),
        )
        .route("/inventory", get(inventory::index).post(inventory::create))
        .route("/users", get(users::index).post(users::create))
}

/// Create the e-commerce API routes router.
pub fn ecommerce_routes() -> Router<AppState> {
    Router::new()
        .route("/customers", get(customers::index).post(customers::create))
        .route(
            "/ecommerce_orders",
            get(ecommerce_orders::index).post(ecommerce_orders::create),
        )
        .route(
            "/ecommerce_order_items",
            get(ecommerce_orders::index_items).post(ecommerce_orders::create_item),
        )
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/api", pos_routes().merge(ecommerce_routes()))
}

/// Build the complete application with its middleware stack.
///
/// Shared by the server binary and the integration tests.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config().cors_allowed_origins);

    routes()
        .layer(cors)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode, header},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::ApiConfig;
    use crate::db::test_support::{TestDb, test_db};
    use crate::state::AppState;

    /// The full application over a fresh data file.
    pub struct TestApp {
        pub router: Router,
        pub db: TestDb,
    }

    pub async fn test_app() -> TestApp {
        let db = test_db().await;
        let state = AppState::new(ApiConfig::local(db.config.clone()), db.pool.clone());
        TestApp {
            router: super::app(state),
            db,
        }
    }

    impl TestApp {
        #[allow(clippy::expect_used)]
        pub async fn request(&self, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
            let mut builder = Request::builder().method(method).uri(uri);
            if body.is_some() {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
            }
            let request = builder
                .body(body.map_or_else(Body::empty, |b| Body::from(b.to_owned())))
                .expect("build request");

            let response = self
                .router
                .clone()
                .oneshot(request)
                .await
                .expect("infallible");
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX)
                .await
                .expect("read body");
            let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            (status, json)
        }

        pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
            self.request(Method::GET, uri, None).await
        }

        pub async fn post(&self, uri: &str, body: &str) -> (StatusCode, Value) {
            self.request(Method::POST, uri, Some(body)).await
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;

    use super::test_support::test_app;

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = test_app().await;
        let (status, _) = app.get("/api/refunds").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test_app().await;
        let (status, body) = app.post("/api/products", "{\"name\": ").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "bad_request");
    }

    #[tokio::test]
    async fn test_mistyped_field_is_validation_error() {
        let app = test_app().await;

        let (status, body) = app
            .post("/api/products", r#"{"name":"Cola","price":"abc"}"#)
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["kind"], "validation");
        assert!(body["error"].as_str().unwrap().contains("price"));

        let (status, body) = app
            .post(
                "/api/inventory",
                r#"{"product_id":1,"quantity":1.5}"#,
            )
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["kind"], "validation");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let app = test_app().await;
        let (status, body) = app
            .request(
                axum::http::Method::POST,
                "/api/customers",
                None,
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "bad_request");
    }
}
