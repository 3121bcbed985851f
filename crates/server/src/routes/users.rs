//! User route handlers.

use axum::{Json, extract::State, http::StatusCode};

use recmart_core::{NewUser, User, UserId};

use crate::error::{AppError, Result};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// Create a user.
///
/// # Errors
///
/// Returns 422 if the body is not `{"name": <string>}`.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewUser>,
) -> Result<(StatusCode, Json<User>)> {
    let user = state.store_mut().await.create_user(new)?;
    tracing::info!(user_id = %user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// List all users.
pub async fn index(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store().await.users().to_vec())
}

/// Get a user by ID.
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<UserId>,
) -> Result<Json<User>> {
    let store = state.store().await;
    store
        .user(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("User not found!".to_string()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_support::{demo_app, get, post};

    #[tokio::test]
    async fn test_create_user_assigns_next_id() {
        let (app, _) = demo_app();
        let (status, body) = post(&app, "/api/v1/users", json!({"name": "Rohit"})).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"id": 4, "name": "Rohit"}));
    }

    #[tokio::test]
    async fn test_created_user_can_be_fetched() {
        let (app, _) = demo_app();
        let (_, created) = post(&app, "/api/v1/users", json!({"name": "Meera"})).await;
        let (status, fetched) = get(&app, "/api/v1/users/4").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_list_users() {
        let (app, _) = demo_app();
        let (status, body) = get(&app, "/api/v1/users").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"id": 1, "name": "Rohit"},
                {"id": 2, "name": "Ashish"},
                {"id": 3, "name": "Suraj"}
            ])
        );
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let (app, _) = demo_app();
        let (status, body) = get(&app, "/api/v1/users/199999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "User not found!"}));
    }

    #[tokio::test]
    async fn test_get_user_invalid_id() {
        let (app, _) = demo_app();
        let (status, body) = get(&app, "/api/v1/users/user_id_str").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.get("detail").is_some());
    }

    #[tokio::test]
    async fn test_create_user_schema_errors() {
        let (app, state) = demo_app();

        let (status, body) = post(&app, "/api/v1/users", json!({})).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());

        let (status, _) = post(&app, "/api/v1/users", json!({"name": 12})).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        assert_eq!(state.store().await.users().len(), 3);
    }
}
