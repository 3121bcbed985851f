//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                                         - Welcome message
//! GET  /health                                   - Health check
//!
//! # Users
//! POST /api/v1/users                             - Create user (201)
//! GET  /api/v1/users                             - List users
//! GET  /api/v1/users/{id}                        - User detail
//!
//! # Products
//! POST /api/v1/products                          - Create product (201)
//! GET  /api/v1/products                          - List products
//! GET  /api/v1/products/recommendation/users/{id} - Recommendations for a user
//! GET  /api/v1/products/{prod_id}/users/{user_id} - Product detail, records browse history
//!
//! # Orders
//! POST /api/v1/orders                            - Place order, records purchase history
//! GET  /api/v1/orders                            - List orders
//! GET  /api/v1/orders/{id}                       - Order detail
//! GET  /api/v1/orders/users/{id}                 - Orders of a user
//! ```

pub mod home;
pub mod orders;
pub mod products;
pub mod users;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Base path for the versioned API.
pub const API_PREFIX: &str = "/api/v1";

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::index).post(users::create))
        .route("/{id}", get(users::show))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route(
            "/recommendation/users/{user_id}",
            get(products::recommendation),
        )
        .route("/{prod_id}/users/{user_id}", get(products::show))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index).post(orders::create))
        .route("/users/{user_id}", get(orders::by_user))
        .route("/{id}", get(orders::show))
}

/// Create the versioned API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user_routes())
        .nest("/products", product_routes())
        .nest("/orders", order_routes())
}

/// Create all routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::welcome))
        .route("/health", get(home::health))
        .nest(API_PREFIX, api_routes())
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Helpers for driving the router in-process.

    #![allow(clippy::unwrap_used)]

    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode, header},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::state::AppState;
    use crate::store::Store;

    /// Router over the demo catalogue, plus the state for inspection.
    pub fn demo_app() -> (Router, AppState) {
        let state = AppState::new(Store::demo());
        (super::routes().with_state(state.clone()), state)
    }

    /// Send a request and decode the JSON response body.
    pub async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
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
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, value)
    }

    pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        send(app, Method::GET, uri, None).await
    }

    pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        send(app, Method::POST, uri, Some(body)).await
    }
}
