use actix_web::{web, FromRequest, HttpMessage};
use argon2::{
    password_hash::{Error as PasswordHashError, PasswordHash},
    Argon2, PasswordVerifier,
};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::error;

lazy_static::lazy_static! {
  static ref ARGON2: Argon2<'static> = Argon2::default();
}

pub fn verify_password(hash: &str, password: &str) -> Result<bool, error::SystemError> {
    let parsed_hash = PasswordHash::new(hash)?;
    match ARGON2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(_) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(e) => Err(error::SystemError::HashError(e)),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: uuid::Uuid,
    pub iat: u64,
    pub exp: u64,
}

impl Claims {
    pub fn new(sub: &uuid::Uuid, exp: u64) -> Self {
        let now = chrono::Utc::now().timestamp() as u64;
        Claims { sub: *sub, iat: now, exp: now + exp }
    }

    pub fn encode(&self, secret: &[u8]) -> Result<String, error::SystemError> {
        let header = Header::new(Algorithm::HS256);
        let token = encode(&header, self, &EncodingKey::from_secret(secret))?;
        Ok(token)
    }

    #[allow(unused)]
    pub fn decode(token: &str, secret: &[u8]) -> Result<Self, error::SystemError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = false;
        let token_data = decode::<Self>(token, &DecodingKey::from_secret(secret), &validation)?;
        Ok(token_data.claims)
    }
}

/// Reports an extractor failure once; errors already shaped by the configured
/// error handlers are passed through as they are.
fn extractor_error(err: actix_web::Error) -> error::Error {
    err.as_error::<error::Error>()
        .cloned()
        .unwrap_or_else(|| error::Error::bad_request(err.to_string()))
}

/// Validated request body, accepted as JSON or as an urlencoded form.
pub struct ValidatedBody<T>(pub T);

impl<T> FromRequest for ValidatedBody<T>
where
    T: Validate + serde::de::DeserializeOwned + 'static,
{
    type Error = error::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        let body: LocalBoxFuture<'static, Result<T, actix_web::Error>> =
            if req.content_type() == "application/x-www-form-urlencoded" {
                let fut = web::Form::<T>::from_request(req, payload);
                Box::pin(async move { fut.await.map(web::Form::into_inner) })
            } else {
                let fut = web::Json::<T>::from_request(req, payload);
                Box::pin(async move { fut.await.map(web::Json::into_inner) })
            };

        Box::pin(async move {
            let model = body.await.map_err(extractor_error)?;
            model.validate().map_err(|e| error::Error::BadRequest(e.to_string().into()))?;
            Ok(ValidatedBody(model))
        })
    }
}
