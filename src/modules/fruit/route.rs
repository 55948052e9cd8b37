use crate::modules::fruit::handle::*;
use actix_web::web::{ServiceConfig, scope};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/fruits")
            .service(create_fruit)
            .service(list_fruits)
            .service(filter_by_price)
            .service(filter_by_name)
            .service(get_fruit)
            .service(update_fruit)
            .service(delete_fruit),
    );
}
