use actix_cors::Cors;
use actix_web::{self, App, HttpServer, middleware::Logger, web};
use std::sync::{Arc, LazyLock};

use crate::{
    configs::connect_database,
    modules::{
        distributor::{repository_pg::DistributorRepositoryPg, service::DistributorService},
        file_upload::{
            model::UploadConfig, repository_pg::FilePgRepository, service::FileUploadService,
        },
        fruit::{repository_pg::FruitRepositoryPg, service::FruitService},
        user::{model::AuthConfig, repository_pg::UserRepositoryPg, service::UserService},
    },
};

mod api;
mod configs;
mod constants;
mod modules;
#[cfg(test)]
mod test;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    // after the .env load so RUST_LOG from the file applies
    logger_builder().init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

fn logger_builder() -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
}

#[actix_web::get("/")]
async fn welcome() -> &'static str {
    "Welcome to Fruit Management API"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    LazyLock::force(&ENV);

    let db_pool = connect_database().await.map_err(|e| {
        log::error!("Database connection failed: {}", e);
        std::io::Error::other("Database connection error")
    })?;

    let distributor_repo = Arc::new(DistributorRepositoryPg::new(db_pool.clone()));
    let fruit_repo = Arc::new(FruitRepositoryPg::new(db_pool.clone()));
    let file_repo = Arc::new(FilePgRepository::new(db_pool.clone()));
    let user_repo = Arc::new(UserRepositoryPg::new(db_pool.clone()));

    let distributor_service = DistributorService::with_dependencies(distributor_repo.clone());
    let fruit_service = FruitService::with_dependencies(fruit_repo, distributor_repo);
    let upload_service = FileUploadService::new(
        file_repo,
        UploadConfig {
            max_file_size: ENV.max_upload_size,
            upload_dir: ENV.upload_dir.clone(),
            ..UploadConfig::default()
        },
    );
    let user_service = UserService::with_dependencies(
        user_repo,
        AuthConfig {
            jwt_secret: ENV.jwt_secret.clone(),
            token_expiration: ENV.token_expiration,
        },
    );

    log::info!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(ENV.frontend_url.as_str())
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .configure(api::configure_extractors)
            .app_data(web::Data::new(distributor_service.clone()))
            .app_data(web::Data::new(fruit_service.clone()))
            .app_data(web::Data::new(upload_service.clone()))
            .app_data(web::Data::new(user_service.clone()))
            .service(welcome)
            .service(
                web::scope("/api")
                    .configure(modules::distributor::route::configure)
                    .configure(modules::fruit::route::configure)
                    .configure(modules::file_upload::route::configure)
                    .configure(modules::user::route::configure),
            )
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(ENV.workers)
    .run()
    .await
}
