//! API route configuration.

use crate::api::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, update_user_handler,
    user_list_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// User routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /users`        - List all users
/// - `POST   /users`        - Create a user (validated)
/// - `PUT    /users`        - Replace a user by the id in the body (validated)
/// - `GET    /users/{id}`   - Fetch a user, `null` if absent
/// - `DELETE /users/{id}`   - Delete a user (idempotent)
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(user_list_handler)
                .post(create_user_handler)
                .put(update_user_handler),
        )
        .route(
            "/users/{id}",
            get(get_user_handler).delete(delete_user_handler),
        )
}
