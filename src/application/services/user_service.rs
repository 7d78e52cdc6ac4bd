//! User management service.

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Pass-through service between the HTTP handlers and the user repository.
///
/// Validation happens in the handlers before these methods are reached.
pub struct UserService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all stored users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.find_all().await
    }

    /// Looks up a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Stores a new user and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_user(&self, user: NewUser) -> Result<User, AppError> {
        let created = self.repository.save(user).await?;
        tracing::info!(user_id = created.id, "User created");
        Ok(created)
    }

    /// Replaces the user stored at `user.id`, inserting it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_user(&self, user: NewUser) -> Result<User, AppError> {
        let updated = self.repository.save(user).await?;
        tracing::info!(user_id = updated.id, "User updated");
        Ok(updated)
    }

    /// Deletes a user. Missing ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete_by_id(id).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Reports whether the backing store answers.
    pub async fn health_check(&self) -> bool {
        self.repository.ping().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use serde_json::json;

    fn create_test_user(id: i64, first_name: &str) -> User {
        User::new(
            id,
            first_name.to_string(),
            "Doe".to_string(),
            30,
            "jane@doe.com".to_string(),
            Some("x".to_string()),
        )
    }

    fn new_user(id: Option<i64>) -> NewUser {
        NewUser {
            id,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            age: 30,
            email: "jane@doe.com".to_string(),
            password: Some("x".to_string()),
        }
    }

    #[tokio::test]
    async fn test_get_all_users() {
        let mut mock_repo = MockUserRepository::new();

        let users = vec![create_test_user(1, "Jane"), create_test_user(2, "John")];
        mock_repo
            .expect_find_all()
            .times(1)
            .returning(move || Ok(users.clone()));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.get_all_users().await;

        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_user_by_id_absent() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.get_user_by_id(42).await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_user_delegates_to_save() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_save()
            .withf(|user| user.id.is_none() && user.first_name == "Jane")
            .times(1)
            .returning(|user| Ok(user.into_user(1)));

        let service = UserService::new(Arc::new(mock_repo));

        let created = service.add_user(new_user(None)).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.first_name, "Jane");
    }

    #[tokio::test]
    async fn test_update_user_passes_id_through() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_save()
            .withf(|user| user.id == Some(9))
            .times(1)
            .returning(|user| Ok(user.into_user(9)));

        let service = UserService::new(Arc::new(mock_repo));

        let updated = service.update_user(new_user(Some(9))).await.unwrap();

        assert_eq!(updated.id, 9);
    }

    #[tokio::test]
    async fn test_delete_user() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_delete_by_id()
            .withf(|id| *id == 3)
            .times(1)
            .returning(|_| Ok(()));

        let service = UserService::new(Arc::new(mock_repo));

        assert!(service.delete_user(3).await.is_ok());
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_all()
            .times(1)
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.get_all_users().await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_health_check_reports_ping_failure() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_ping()
            .times(1)
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        let service = UserService::new(Arc::new(mock_repo));

        assert!(!service.health_check().await);
    }
}
