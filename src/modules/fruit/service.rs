use log::info;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::modules::distributor::repository::DistributorRepository;
use crate::modules::fruit::{
    model::{
        CreateFruitModel, FruitResponse, FruitSummary, InsertFruit, UpdateFruit, UpdateFruitModel,
    },
    repository::FruitRepository,
    schema::FruitEntity,
};

const NAME_PREFIXES: [&str; 2] = ["a", "x"];

#[derive(Clone)]
pub struct FruitService {
    fruit_repo: Arc<dyn FruitRepository + Send + Sync>,
    distributor_repo: Arc<dyn DistributorRepository + Send + Sync>,
}

impl FruitService {
    pub fn with_dependencies(
        fruit_repo: Arc<dyn FruitRepository + Send + Sync>,
        distributor_repo: Arc<dyn DistributorRepository + Send + Sync>,
    ) -> Self {
        info!("FruitService initialized with dependencies");
        FruitService { fruit_repo, distributor_repo }
    }

    async fn ensure_distributor(&self, id: &Uuid) -> Result<(), error::SystemError> {
        if self.distributor_repo.find_by_id(id).await?.is_none() {
            return Err(error::SystemError::not_found("Distributor not found"));
        }
        Ok(())
    }

    pub async fn create(&self, fruit: CreateFruitModel) -> Result<FruitEntity, error::SystemError> {
        self.ensure_distributor(&fruit.id_distributor).await?;
        let entity = self.fruit_repo.create(&InsertFruit::from(fruit)).await?;
        info!("Fruit {} created", entity.id);
        Ok(entity)
    }

    pub async fn get_all(&self) -> Result<Vec<FruitResponse>, error::SystemError> {
        self.fruit_repo.find_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<FruitResponse, error::SystemError> {
        self.fruit_repo
            .find_detail_by_id(&id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Fruit not found"))
    }

    pub async fn filter_by_price(
        &self,
        min_price: f64,
        max_price: f64,
    ) -> Result<Vec<FruitSummary>, error::SystemError> {
        self.fruit_repo.find_by_price_range(min_price, max_price).await
    }

    pub async fn filter_by_name(&self) -> Result<Vec<FruitSummary>, error::SystemError> {
        self.fruit_repo.find_by_name_prefixes(&NAME_PREFIXES).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        fruit: UpdateFruitModel,
    ) -> Result<FruitEntity, error::SystemError> {
        if self.fruit_repo.find_by_id(&id).await?.is_none() {
            return Err(error::SystemError::not_found("Fruit not found"));
        }

        if let Some(distributor_id) = &fruit.id_distributor {
            self.ensure_distributor(distributor_id).await?;
        }

        // the row can disappear between the lookup and the update
        let entity = self
            .fruit_repo
            .update(&id, &UpdateFruit::from(fruit))
            .await?
            .ok_or_else(|| error::SystemError::not_found("Fruit not found"))?;
        info!("Fruit {} updated", id);
        Ok(entity)
    }

    pub async fn delete(&self, id: Uuid) -> Result<FruitEntity, error::SystemError> {
        let entity = self
            .fruit_repo
            .delete(&id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Fruit not found"))?;
        info!("Fruit {} deleted", id);
        Ok(entity)
    }
}
