//! Handlers for the user endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::user::{UserRequest, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users.
///
/// # Endpoint
///
/// `GET /api/users`
pub async fn user_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.get_all_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Fetches a single user.
///
/// # Endpoint
///
/// `GET /api/users/{id}`
///
/// A missing user is not an error: the body is JSON `null`.
pub async fn get_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Option<UserResponse>>, AppError> {
    let user = state.user_service.get_user_by_id(id).await?;

    Ok(Json(user.map(UserResponse::from)))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// {
///   "firstName": "Jane",
///   "lastName": "Doe",
///   "age": 30,
///   "email": "jane@doe.com",
///   "password": "secret"
/// }
/// ```
///
/// Any `id` in the body is ignored; the store assigns one.
///
/// # Errors
///
/// Returns 400 with every violated field rule if validation fails.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<UserRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    let mut user = payload.into_new_user()?;
    user.id = None;

    state.user_service.add_user(user).await?;

    Ok(StatusCode::CREATED)
}

/// Replaces a user in full, inserting it if the id is unknown.
///
/// # Endpoint
///
/// `PUT /api/users`
///
/// The body has the same shape as for create and must include `id`.
///
/// # Errors
///
/// Returns 400 with every violated field rule, or a missing `id`.
pub async fn update_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<UserRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate_for_update()?;

    let user = payload.into_new_user()?;
    state.user_service.update_user(user).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}`
///
/// Idempotent: deleting a missing user also returns 204.
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
