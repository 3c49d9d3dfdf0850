use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{DatabaseError, Error, Result, ValidationError};
use crate::users::users_model::{NewUser, User};
use crate::users::users_traits::{UserRepositoryTrait, UserServiceTrait};

pub struct UserService {
    user_repo: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { user_repo }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    fn get_user(&self, user_id: &str) -> Result<User> {
        self.user_repo.get_user(user_id)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.user_repo.find_by_email(&email.trim().to_lowercase())
    }

    async fn register_user(&self, mut new_user: NewUser) -> Result<User> {
        new_user.email = new_user.email.trim().to_lowercase();
        if new_user.email.is_empty() || !new_user.email.contains('@') {
            return Err(ValidationError::InvalidInput("invalid email address".to_string()).into());
        }
        if new_user.display_name.trim().is_empty() {
            new_user.display_name = new_user.email.clone();
        }
        match self.user_repo.insert_user(new_user).await {
            // The unique index is the authority on duplicates; report it as
            // a validation failure, not a server fault.
            Err(Error::Database(DatabaseError::UniqueViolation(_))) => Err(
                ValidationError::InvalidInput("email is already registered".to_string()).into(),
            ),
            other => other,
        }
    }
}
