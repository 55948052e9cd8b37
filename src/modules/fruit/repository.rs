use uuid::Uuid;

use crate::{
    api::error,
    modules::fruit::{
        model::{FruitResponse, FruitSummary, InsertFruit, UpdateFruit},
        schema::FruitEntity,
    },
};

#[async_trait::async_trait]
pub trait FruitRepository {
    async fn create(&self, fruit: &InsertFruit) -> Result<FruitEntity, error::SystemError>;
    async fn find_all(&self) -> Result<Vec<FruitResponse>, error::SystemError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<FruitEntity>, error::SystemError>;
    async fn find_detail_by_id(
        &self,
        id: &Uuid,
    ) -> Result<Option<FruitResponse>, error::SystemError>;

    /// Inclusive on both bounds, highest quantity first.
    async fn find_by_price_range(
        &self,
        min_price: f64,
        max_price: f64,
    ) -> Result<Vec<FruitSummary>, error::SystemError>;

    /// Case-insensitive match on the first character of the name.
    async fn find_by_name_prefixes(
        &self,
        prefixes: &[&str],
    ) -> Result<Vec<FruitSummary>, error::SystemError>;

    async fn update(
        &self,
        id: &Uuid,
        fruit: &UpdateFruit,
    ) -> Result<Option<FruitEntity>, error::SystemError>;
    async fn delete(&self, id: &Uuid) -> Result<Option<FruitEntity>, error::SystemError>;
}
