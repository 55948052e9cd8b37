use actix_web::{post, web};

use crate::modules::distributor::{
    model::CreateDistributorModel, schema::DistributorEntity, service::DistributorService,
};
use crate::{
    api::{error, success},
    utils::ValidatedBody,
};

#[post("")]
pub async fn create_distributor(
    distributor_service: web::Data<DistributorService>,
    body: ValidatedBody<CreateDistributorModel>,
) -> Result<success::Success<DistributorEntity>, error::Error> {
    let distributor = distributor_service.create(body.0).await?;
    Ok(success::Success::created(Some(distributor)).message("Distributor added successfully"))
}
