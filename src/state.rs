//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::UserService;
use crate::domain::repositories::UserRepository;

/// Service backed by whichever repository was wired at startup.
pub type DynUserService = UserService<dyn UserRepository>;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<DynUserService>,
}

impl AppState {
    /// Wires the service layer over a repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(repository)),
        }
    }
}
