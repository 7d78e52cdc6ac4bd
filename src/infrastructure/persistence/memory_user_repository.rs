//! Process-local user repository.
//!
//! Backs the HTTP tests and can stand in for PostgreSQL when no database is
//! wanted. Contents are lost when the process exits.

use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

#[derive(Debug, Default)]
struct Store {
    rows: BTreeMap<i64, User>,
    last_id: i64,
}

/// In-memory repository keyed by id.
///
/// Generated ids are strictly increasing and always greater than any id
/// written through an explicit upsert.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn save(&self, user: NewUser) -> Result<User, AppError> {
        let mut store = self.store.write().await;

        let id = match user.id {
            Some(id) => id,
            None => store.last_id.checked_add(1).ok_or_else(|| {
                AppError::internal("User id space exhausted", json!({ "lastId": store.last_id }))
            })?,
        };
        store.last_id = store.last_id.max(id);

        let user = user.into_user(id);
        store.rows.insert(id, user.clone());

        Ok(user)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let mut store = self.store.write().await;
        store.rows.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
