#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::HeaderValue;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use user_api::domain::entities::{NewUser, User};
use user_api::domain::repositories::UserRepository;
use user_api::error::AppError;
use user_api::infrastructure::persistence::InMemoryUserRepository;
use user_api::routes::router;
use user_api::state::AppState;

pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Repository whose every call fails like an unreachable database.
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<User>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn save(&self, _user: NewUser) -> Result<User, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn delete_by_id(&self, _id: i64) -> Result<(), AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::internal("Database error", json!({})))
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryUserRepository>) {
    let repo = Arc::new(InMemoryUserRepository::new());
    let state = AppState::new(repo.clone());
    (state, repo)
}

pub fn make_server_with(state: AppState) -> TestServer {
    let app = router(
        state,
        HeaderValue::from_static(ALLOWED_ORIGIN),
        Duration::from_secs(3600),
    );
    TestServer::new(app).unwrap()
}

pub fn make_server() -> (TestServer, Arc<InMemoryUserRepository>) {
    let (state, repo) = create_test_state();
    (make_server_with(state), repo)
}

pub fn valid_user_json() -> Value {
    json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "age": 30,
        "email": "jane@doe.com",
        "password": "x"
    })
}

pub fn new_user(first_name: &str) -> NewUser {
    NewUser {
        id: None,
        first_name: first_name.to_string(),
        last_name: "Doe".to_string(),
        age: 30,
        email: "jane@doe.com".to_string(),
        password: Some("hunter2".to_string()),
    }
}

/// Field names reported in a validation error body.
pub fn violated_fields(body: &Value) -> Vec<String> {
    let mut fields: Vec<String> = body["error"]["details"]["fields"]
        .as_object()
        .map(|m| m.keys().cloned().collect())
        .unwrap_or_default();
    fields.sort();
    fields
}
