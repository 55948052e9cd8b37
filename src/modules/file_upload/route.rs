use crate::modules::file_upload::handle::*;
use actix_web::web::ServiceConfig;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(upload_image).service(upload_file);
}
