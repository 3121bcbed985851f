//! Welcome and health endpoints.

use axum::Json;
use serde::Serialize;

/// Body of the welcome endpoint.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// Greet API clients at the root path.
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Hello Recmart E-commerce App!",
    })
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
pub async fn health() -> &'static str {
    "ok"
}
