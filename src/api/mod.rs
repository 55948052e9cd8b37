use actix_web::web;

pub mod error;
pub mod success;

/// Extractor configs that report malformed input through the JSON error envelope.
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _| {
        error::Error::bad_request(err.to_string()).into()
    }))
    .app_data(web::FormConfig::default().error_handler(|err, _| {
        error::Error::bad_request(err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _| {
        error::Error::bad_request(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _| {
        error::Error::bad_request(err.to_string()).into()
    }));
}
