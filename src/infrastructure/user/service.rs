//! User service for registration and authentication

use std::sync::Arc;

use crate::domain::user::{validate_password, User, UserId};
use crate::domain::{DomainError, Storage};

use super::password::PasswordHasher;

/// Request for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
}

/// User service for registration and authentication
#[derive(Debug)]
pub struct UserService {
    storage: Arc<dyn Storage<User>>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    /// Create a new user service
    pub fn new(storage: Arc<dyn Storage<User>>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { storage, hasher }
    }

    /// Register a new user
    pub async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        validate_password(&request.password)?;

        if self.get_by_username(&request.username).await?.is_some() {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                request.username
            )));
        }

        let password_hash = self.hasher.hash(&request.password)?;
        let user = User::new(&request.username, password_hash)?;

        self.storage.create(user).await
    }

    /// Authenticate a user with username and password
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let mut user = match self.get_by_username(username).await? {
            Some(u) => u,
            None => return Ok(None),
        };

        if !self.hasher.verify(password, user.password_hash()) {
            return Ok(None);
        }

        user.record_login();
        let user = self.storage.update(user).await?;

        Ok(Some(user))
    }

    /// Get a user by ID
    pub async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        let user_id = UserId::new(id)?;
        self.storage.get(&user_id).await
    }

    /// Get a user by username
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.storage.list().await?;
        Ok(users.into_iter().find(|u| u.username() == username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryStorage;
    use crate::infrastructure::user::password::Argon2Hasher;

    fn create_service() -> UserService {
        let storage = Arc::new(InMemoryStorage::<User>::new());
        let hasher = Arc::new(Argon2Hasher::new());
        UserService::new(storage, hasher)
    }

    fn make_request(username: &str, password: &str) -> RegisterUserRequest {
        RegisterUserRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_user() {
        let service = create_service();

        let user = service
            .register(make_request("testuser", "secure_password123"))
            .await
            .unwrap();

        assert_eq!(user.username(), "testuser");
        assert_ne!(user.password_hash(), "secure_password123");
    }

    #[tokio::test]
    async fn test_register_invalid_username() {
        let service = create_service();

        let result = service.register(make_request("ab", "secure_password123")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_register_invalid_password() {
        let service = create_service();

        let result = service.register(make_request("testuser", "short")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let service = create_service();

        service
            .register(make_request("testuser", "secure_password123"))
            .await
            .unwrap();

        let result = service
            .register(make_request("testuser", "secure_password456"))
            .await;

        assert!(matches!(result.unwrap_err(), DomainError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let service = create_service();

        service
            .register(make_request("testuser", "secure_password123"))
            .await
            .unwrap();

        let user = service
            .authenticate("testuser", "secure_password123")
            .await
            .unwrap();

        assert!(user.is_some());
        assert!(user.unwrap().last_login_at().is_some());
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let service = create_service();

        service
            .register(make_request("testuser", "secure_password123"))
            .await
            .unwrap();

        let user = service.authenticate("testuser", "wrong_password").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_authenticate_nonexistent_user() {
        let service = create_service();

        let user = service.authenticate("nonexistent", "password").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let service = create_service();

        let created = service
            .register(make_request("testuser", "secure_password123"))
            .await
            .unwrap();

        let fetched = service.get(created.id().as_str()).await.unwrap();
        assert_eq!(fetched.unwrap().username(), "testuser");
    }

    #[tokio::test]
    async fn test_multiple_registrations_coexist() {
        let service = create_service();

        service
            .register(make_request("user1", "password123"))
            .await
            .unwrap();
        service
            .register(make_request("user2", "password123"))
            .await
            .unwrap();

        assert!(service.get_by_username("user1").await.unwrap().is_some());
        assert!(service.get_by_username("user2").await.unwrap().is_some());
    }
}
