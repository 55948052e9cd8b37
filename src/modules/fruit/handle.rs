use actix_web::{delete, get, post, put, web};
use uuid::Uuid;

use crate::modules::fruit::{
    model::{CreateFruitModel, FruitResponse, FruitSummary, PriceRangeQuery, UpdateFruitModel},
    schema::FruitEntity,
    service::FruitService,
};
use crate::{
    api::{error, success},
    utils::ValidatedBody,
};

#[post("")]
pub async fn create_fruit(
    fruit_service: web::Data<FruitService>,
    body: ValidatedBody<CreateFruitModel>,
) -> Result<success::Success<FruitEntity>, error::Error> {
    let fruit = fruit_service.create(body.0).await?;
    Ok(success::Success::created(Some(fruit)).message("Fruit added successfully"))
}

#[get("")]
pub async fn list_fruits(
    fruit_service: web::Data<FruitService>,
) -> Result<success::Success<Vec<FruitResponse>>, error::Error> {
    let fruits = fruit_service.get_all().await?;
    Ok(success::Success::list(fruits))
}

#[get("/filter/price")]
pub async fn filter_by_price(
    fruit_service: web::Data<FruitService>,
    query: web::Query<PriceRangeQuery>,
) -> Result<success::Success<Vec<FruitSummary>>, error::Error> {
    let (Some(min_price), Some(max_price)) = (query.min_price, query.max_price) else {
        return Err(error::Error::bad_request("Please provide min_price and max_price"));
    };
    let fruits = fruit_service.filter_by_price(min_price, max_price).await?;
    Ok(success::Success::list(fruits))
}

#[get("/filter/name")]
pub async fn filter_by_name(
    fruit_service: web::Data<FruitService>,
) -> Result<success::Success<Vec<FruitSummary>>, error::Error> {
    let fruits = fruit_service.filter_by_name().await?;
    Ok(success::Success::list(fruits))
}

#[get("/{id}")]
pub async fn get_fruit(
    fruit_service: web::Data<FruitService>,
    fruit_id: web::Path<Uuid>,
) -> Result<success::Success<FruitResponse>, error::Error> {
    let fruit = fruit_service.get_by_id(fruit_id.into_inner()).await?;
    Ok(success::Success::ok(Some(fruit)))
}

#[put("/{id}")]
pub async fn update_fruit(
    fruit_service: web::Data<FruitService>,
    fruit_id: web::Path<Uuid>,
    body: ValidatedBody<UpdateFruitModel>,
) -> Result<success::Success<FruitEntity>, error::Error> {
    let fruit = fruit_service.update(fruit_id.into_inner(), body.0).await?;
    Ok(success::Success::ok(Some(fruit)).message("Fruit updated successfully"))
}

#[delete("/{id}")]
pub async fn delete_fruit(
    fruit_service: web::Data<FruitService>,
    fruit_id: web::Path<Uuid>,
) -> Result<success::Success<FruitEntity>, error::Error> {
    let fruit = fruit_service.delete(fruit_id.into_inner()).await?;
    Ok(success::Success::ok(Some(fruit)).message("Fruit deleted successfully"))
}
