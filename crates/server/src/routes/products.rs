//! Product route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use recmart_core::{NewProduct, Product, ProductId, UserId};

use crate::error::{AppError, Result};
use crate::extract::{ApiJson, ApiPath};
use crate::services;
use crate::state::AppState;

/// Recommendation response body.
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub products: Vec<Product>,
}

/// Create a product.
///
/// # Errors
///
/// Returns 422 if the body is not `{"name": <string>}`.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewProduct>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = state.store_mut().await.create_product(new)?;
    tracing::info!(product_id = %product.id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// List all products.
pub async fn index(State(state): State<AppState>) -> Json<Vec<Product>> {
    let store = state.store().await;
    Json(store.products().to_vec())
}

/// Get a product on behalf of a viewing user.
///
/// Records the product in the user's browse history. An unknown user does
/// not fail the request; the history write is skipped.
///
/// # Errors
///
/// Returns 404 if the product does not exist.
pub async fn show(
    State(state): State<AppState>,
    ApiPath((prod_id, user_id)): ApiPath<(ProductId, UserId)>,
) -> Result<Json<Product>> {
    let mut store = state.store_mut().await;
    let product = store
        .product(prod_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Product not found!".to_string()))?;

    store.record_browse(user_id, prod_id);
    Ok(Json(product))
}

/// Recommend products for a user.
///
/// # Errors
///
/// Returns 400 if the user does not exist.
pub async fn recommendation(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<UserId>,
) -> Result<Json<RecommendationResponse>> {
    let store = state.store().await;
    let products = services::recommend(&store, user_id)?;
    Ok(Json(RecommendationResponse { products }))
}
