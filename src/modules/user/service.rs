use log::info;
use std::sync::Arc;

use crate::api::error;
use crate::modules::user::{
    model::{AuthConfig, LoginModel},
    repository::UserRepository,
};
use crate::utils::{Claims, verify_password};

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository + Send + Sync>,
    config: AuthConfig,
}

impl UserService {
    pub fn with_dependencies(
        repo: Arc<dyn UserRepository + Send + Sync>,
        config: AuthConfig,
    ) -> Self {
        info!("UserService initialized with dependencies");
        UserService { repo, config }
    }

    /// Returns a signed access token for valid credentials.
    pub async fn login(&self, credentials: LoginModel) -> Result<String, error::SystemError> {
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return Err(error::SystemError::bad_request("Email and password are required"));
        }

        let user_entity = self
            .repo
            .find_by_email(&credentials.email)
            .await?
            .ok_or_else(|| error::SystemError::unauthorized("Invalid email or password"))?;

        let valid = verify_password(&user_entity.hash_password, &credentials.password)?;
        if !valid {
            return Err(error::SystemError::unauthorized("Invalid email or password"));
        }

        let token = Claims::new(&user_entity.id, self.config.token_expiration)
            .encode(self.config.jwt_secret.as_ref())?;

        info!("User {} logged in", user_entity.id);
        Ok(token)
    }
}
