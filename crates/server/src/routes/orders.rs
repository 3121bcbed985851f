//! Order route handlers.

use axum::{Json, extract::State};

use recmart_core::{NewOrder, Order, OrderId, UserId};

use crate::error::{AppError, Result};
use crate::extract::{ApiJson, ApiPath};
use crate::services;
use crate::state::AppState;

/// List all orders.
pub async fn index(State(state): State<AppState>) -> Json<Vec<Order>> {
    let store = state.store().await;
    Json(store.orders().to_vec())
}

/// Get an order by ID.
///
/// # Errors
///
/// Returns 404 if the order does not exist.
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<OrderId>,
) -> Result<Json<Order>> {
    let store = state.store().await;
    store
        .order(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Order not found!".to_string()))
}

/// List the orders placed by a user.
///
/// # Errors
///
/// Returns 404 if the user has no orders. The detail tells an unknown user
/// apart from a known user without orders.
pub async fn by_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<UserId>,
) -> Result<Json<Vec<Order>>> {
    let store = state.store().await;
    let orders: Vec<Order> = store.orders_for(user_id).into_iter().cloned().collect();

    if orders.is_empty() {
        let detail = if store.user(user_id).is_some() {
            format!("Order not found for user {user_id}")
        } else {
            "User not found!".to_string()
        };
        return Err(AppError::NotFound(detail));
    }

    Ok(Json(orders))
}

/// Place an order.
///
/// # Errors
///
/// Returns 400 if the customer or any product is unknown, 422 on a
/// malformed body.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewOrder>,
) -> Result<Json<Order>> {
    let mut store = state.store_mut().await;
    let order = services::place_order(&mut store, new)?;
    Ok(Json(order))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_support::{demo_app, get, post};

    #[tokio::test]
    async fn test_list_orders() {
        let (app, _) = demo_app();
        let (status, body) = get(&app, "/api/v1/orders").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(4));
        assert_eq!(
            body[0],
            json!({
                "id": 1,
                "customer_id": 3,
                "orderlines": [{"product_id": 2, "qty": 3}, {"product_id": 4, "qty": 1}]
            })
        );
    }

    #[tokio::test]
    async fn test_get_order() {
        let (app, _) = demo_app();
        let (status, body) = get(&app, "/api/v1/orders/2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["customer_id"], json!(1));

        let (status, body) = get(&app, "/api/v1/orders/77").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Order not found!"}));
    }

    #[tokio::test]
    async fn test_orders_by_user() {
        let (app, _) = demo_app();
        let (status, body) = get(&app, "/api/v1/orders/users/3").await;

        assert_eq!(status, StatusCode::OK);
        let ids: Vec<_> = body
            .as_array()
            .into_iter()
            .flatten()
            .map(|o| o["id"].clone())
            .collect();
        assert_eq!(ids, vec![json!(1), json!(3)]);
    }

    #[tokio::test]
    async fn test_orders_by_user_distinguishes_not_found() {
        let (app, _) = demo_app();
        post(&app, "/api/v1/users", json!({"name": "New"})).await;

        let (status, body) = get(&app, "/api/v1/orders/users/4").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Order not found for user 4"}));

        let (status, body) = get(&app, "/api/v1/orders/users/5").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "User not found!"}));
    }

    #[tokio::test]
    async fn test_create_order() {
        let (app, _) = demo_app();
        let (status, body) = post(
            &app,
            "/api/v1/orders",
            json!({"customer_id": 1, "orderlines": [{"product_id": 3, "qty": 2}]}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"id": 5, "customer_id": 1, "orderlines": [{"product_id": 3, "qty": 2}]})
        );

        let (_, body) = get(&app, "/api/v1/products/recommendation/users/1").await;
        let ids: Vec<_> = body["products"]
            .as_array()
            .into_iter()
            .flatten()
            .map(|p| p["id"].clone())
            .collect();
        assert_eq!(ids, vec![json!(2), json!(3), json!(4)]);
    }

    #[tokio::test]
    async fn test_create_order_invalid_references() {
        let (app, state) = demo_app();

        let (status, body) = post(
            &app,
            "/api/v1/orders",
            json!({"customer_id": 9, "orderlines": [{"product_id": 1, "qty": 1}]}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"detail": "Invalid user!"}));

        let (status, body) = post(
            &app,
            "/api/v1/orders",
            json!({"customer_id": 1, "orderlines": [{"product_id": 1, "qty": 1}, {"product_id": 8, "qty": 1}]}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"detail": "Invalid product 8!"}));

        assert_eq!(state.store().await.orders().len(), 4);
    }

    #[tokio::test]
    async fn test_create_order_schema_error() {
        let (app, _) = demo_app();
        let (status, body) = post(
            &app,
            "/api/v1/orders",
            json!({"customer_id": 1, "orderlines": [{"product_id": 1}]}),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
    }
}
