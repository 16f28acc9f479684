//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{normalize_email, CreateUser, Password, User, MIN_NAME_LENGTH};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Create a user, hashing the plain-text password
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

fn email_taken() -> AppError {
    AppError::conflict("Email is already registered")
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found("User")
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        let name = input.name.trim().to_string();
        if name.chars().count() < MIN_NAME_LENGTH {
            return Err(AppError::validation("Name cannot be empty"));
        }
        let email = normalize_email(&input.email)?;

        // Check if email already exists
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(email_taken());
        }

        let password = Password::new(&input.password)?;
        let user = self
            .repo
            .create(name, email, password.into_string(), input.role)
            .await
            .map_err(|e| if e.is_duplicate() { email_taken() } else { e })?;

        info!(user_id = %user.id, role = %user.role, "User created");
        Ok(user)
    }
}
