//! Account service - registration and credential checks.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{
    CTX_LOGIN, CTX_REGISTER, MSG_EMAIL_TAKEN, MSG_LOGIN_FIELDS_REQUIRED,
    MSG_REGISTER_FIELDS_REQUIRED, MSG_USER_NOT_FOUND,
};
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult, StoreContext};
use crate::infra::UserRepository;

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Register a new user with a unique email
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User>;

    /// Check an email/password pair and return the matching user
    async fn login(&self, email: String, password: String) -> AppResult<User>;
}

/// Concrete implementation of AccountService over a user repository.
pub struct Accounts {
    users: Arc<dyn UserRepository>,
}

impl Accounts {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

/// True when every field carries at least one character.
fn all_present(fields: &[&str]) -> bool {
    fields.iter().all(|field| !field.is_empty())
}

#[async_trait]
impl AccountService for Accounts {
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User> {
        if !all_present(&[&name, &email, &password]) {
            return Err(AppError::validation(MSG_REGISTER_FIELDS_REQUIRED));
        }

        if self
            .users
            .find_by_email(&email)
            .await
            .store_context(CTX_REGISTER)?
            .is_some()
        {
            return Err(AppError::conflict(MSG_EMAIL_TAKEN));
        }

        let password_hash = Password::hash_blocking(password).await?.into_string();

        // The unique index still decides when two registrations race past
        // the lookup above.
        let user = self
            .users
            .create(User::new(name, email, password_hash))
            .await
            .map_err(AppError::from_user_insert)?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    async fn login(&self, email: String, password: String) -> AppResult<User> {
        if !all_present(&[&email, &password]) {
            return Err(AppError::validation(MSG_LOGIN_FIELDS_REQUIRED));
        }

        let user = self
            .users
            .find_by_email(&email)
            .await
            .store_context(CTX_LOGIN)?
            .ok_or_else(|| AppError::not_found(MSG_USER_NOT_FOUND))?;

        if !Password::from_hash(user.password_hash.clone())
            .verify_blocking(password)
            .await?
        {
            tracing::debug!(user_id = %user.id, "Password mismatch");
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }
}
