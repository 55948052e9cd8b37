use serde::Deserialize;
use validator::Validate;

/// Missing fields deserialize as empty strings so they are reported like blank ones.
#[derive(Deserialize, Validate)]
pub struct LoginModel {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_expiration: u64,
}
