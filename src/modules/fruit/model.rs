use serde::{de, Deserialize, Deserializer, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::modules::fruit::schema::FruitEntity;

#[derive(Deserialize, Validate)]
pub struct CreateFruitModel {
    #[validate(length(min = 1, message = "Fruit name cannot be empty"))]
    pub name: String,
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: Option<i32>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
    pub status: Option<i32>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub id_distributor: Uuid,
}

#[derive(Deserialize, Validate)]
pub struct UpdateFruitModel {
    #[validate(length(min = 1, message = "Fruit name cannot be empty"))]
    pub name: Option<String>,
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: Option<i32>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
    pub status: Option<i32>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub id_distributor: Option<Uuid>,
}

/// Bounds are optional here so the handler can report both missing at once;
/// blank values count as missing.
#[derive(Deserialize)]
pub struct PriceRangeQuery {
    #[serde(default, deserialize_with = "price_bound")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "price_bound")]
    pub max_price: Option<f64>,
}

fn price_bound<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(None),
    };
    let value: f64 = raw.trim().parse().map_err(de::Error::custom)?;
    if !value.is_finite() {
        return Err(de::Error::custom(format!("price bound must be a finite number, got {raw}")));
    }
    Ok(Some(value))
}

pub struct InsertFruit {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub status: i32,
    pub image: Option<String>,
    pub description: Option<String>,
    pub id_distributor: Uuid,
}

impl From<CreateFruitModel> for InsertFruit {
    fn from(model: CreateFruitModel) -> Self {
        InsertFruit {
            name: model.name,
            quantity: model.quantity.unwrap_or_default(),
            price: model.price.unwrap_or_default(),
            status: model.status.unwrap_or_default(),
            image: model.image,
            description: model.description,
            id_distributor: model.id_distributor,
        }
    }
}

/// Fields left as `None` keep their stored value.
pub struct UpdateFruit {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
    pub status: Option<i32>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub id_distributor: Option<Uuid>,
}

impl From<UpdateFruitModel> for UpdateFruit {
    fn from(model: UpdateFruitModel) -> Self {
        UpdateFruit {
            name: model.name,
            quantity: model.quantity,
            price: model.price,
            status: model.status,
            image: model.image,
            description: model.description,
            id_distributor: model.id_distributor,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributorRef {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributorName {
    pub id: Uuid,
    pub name: String,
}

/// A fruit with its distributor joined in; `id_distributor` is `None` once the
/// referenced distributor no longer exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FruitResponse {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub status: i32,
    pub image: Option<String>,
    pub description: Option<String>,
    pub id_distributor: Option<DistributorRef>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl FruitResponse {
    pub fn new(fruit: FruitEntity, distributor: Option<DistributorRef>) -> Self {
        FruitResponse {
            id: fruit.id,
            name: fruit.name,
            quantity: fruit.quantity,
            price: fruit.price,
            status: fruit.status,
            image: fruit.image,
            description: fruit.description,
            id_distributor: distributor,
            created_at: fruit.created_at,
            updated_at: fruit.updated_at,
        }
    }
}

/// Projection used by the filter endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FruitSummary {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub id_distributor: Option<DistributorName>,
}

#[derive(FromRow)]
pub struct FruitDetailRow {
    #[sqlx(flatten)]
    pub fruit: FruitEntity,
    pub distributor_name: Option<String>,
    pub distributor_address: Option<String>,
}

impl From<FruitDetailRow> for FruitResponse {
    fn from(row: FruitDetailRow) -> Self {
        let distributor = row.distributor_name.map(|name| DistributorRef {
            id: row.fruit.id_distributor,
            name,
            address: row.distributor_address,
        });
        FruitResponse::new(row.fruit, distributor)
    }
}

#[derive(FromRow)]
pub struct FruitSummaryRow {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub id_distributor: Uuid,
    pub distributor_name: Option<String>,
}

impl From<FruitSummaryRow> for FruitSummary {
    fn from(row: FruitSummaryRow) -> Self {
        FruitSummary {
            id: row.id,
            name: row.name,
            quantity: row.quantity,
            price: row.price,
            id_distributor: row
                .distributor_name
                .map(|name| DistributorName { id: row.id_distributor, name }),
        }
    }
}
