use actix_web::{post, web};

use crate::modules::user::{model::LoginModel, service::UserService};
use crate::{
    api::{error, success},
    utils::ValidatedBody,
};

fn login_error(err: error::SystemError) -> error::Error {
    match err {
        error::SystemError::BadRequest(msg) => error::Error::BadRequest(msg),
        error::SystemError::Unauthorized(msg) => error::Error::Unauthorized(msg),
        other => {
            log::error!("Login failed: {:?}", other);
            error::Error::internal("An error occurred during login")
        }
    }
}

#[post("/login")]
pub async fn login(
    user_service: web::Data<UserService>,
    credentials: ValidatedBody<LoginModel>,
) -> Result<success::Success<String>, error::Error> {
    let token = user_service.login(credentials.0).await.map_err(login_error)?;
    Ok(success::Success::token(token).message("Login successful"))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::modules::user::{model::AuthConfig, route, service::UserService};
    use crate::test::MemoryStore;
    use crate::utils::Claims;

    const SECRET: &str = "login-test-secret";

    macro_rules! login_app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .configure(crate::api::configure_extractors)
                    .app_data(web::Data::new(UserService::with_dependencies(
                        $store.clone(),
                        AuthConfig { jwt_secret: SECRET.to_string(), token_expiration: 3600 },
                    )))
                    .configure(route::configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn valid_credentials_yield_token_for_user() {
        let store = Arc::new(MemoryStore::default());
        let user_id = store.seed_user("ann@example.com", "correct horse");
        let app = login_app!(store);

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "email": "ann@example.com", "password": "correct horse" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Login successful");
        let token = body["token"].as_str().unwrap();
        let claims = Claims::decode(token, SECRET.as_bytes()).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[actix_web::test]
    async fn login_accepts_urlencoded_form() {
        let store = Arc::new(MemoryStore::default());
        let user_id = store.seed_user("ann@example.com", "correct horse");
        let app = login_app!(store);

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "ann@example.com"), ("password", "correct horse")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        let claims = Claims::decode(body["token"].as_str().unwrap(), SECRET.as_bytes()).unwrap();
        assert_eq!(claims.sub, user_id);
    }

    #[actix_web::test]
    async fn wrong_password_or_unknown_email_is_unauthorized() {
        let store = Arc::new(MemoryStore::default());
        store.seed_user("ann@example.com", "correct horse");
        let app = login_app!(store);

        for credentials in [
            json!({ "email": "ann@example.com", "password": "battery staple" }),
            json!({ "email": "bob@example.com", "password": "correct horse" }),
        ] {
            let req = test::TestRequest::post().uri("/login").set_json(credentials).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

            let body: Value = test::read_body_json(res).await;
            assert_eq!(body["success"], false);
            assert_eq!(body["message"], "Invalid email or password");
            assert!(body.get("token").is_none());
        }
    }

    #[actix_web::test]
    async fn missing_fields_are_bad_request() {
        let store = Arc::new(MemoryStore::default());
        let app = login_app!(store);

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "email": "ann@example.com" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Email and password are required");
    }

    #[actix_web::test]
    async fn corrupt_stored_hash_is_internal_error() {
        let store = Arc::new(MemoryStore::default());
        store.seed_user_with_hash("ann@example.com", "not-a-phc-string");
        let app = login_app!(store);

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "email": "ann@example.com", "password": "correct horse" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "An error occurred during login");
    }
}
