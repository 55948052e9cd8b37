use log::info;
use std::sync::Arc;

use crate::api::error;
use crate::modules::distributor::{
    model::{CreateDistributorModel, InsertDistributor},
    repository::DistributorRepository,
    schema::DistributorEntity,
};

#[derive(Clone)]
pub struct DistributorService {
    repo: Arc<dyn DistributorRepository + Send + Sync>,
}

impl DistributorService {
    pub fn with_dependencies(repo: Arc<dyn DistributorRepository + Send + Sync>) -> Self {
        info!("DistributorService initialized with dependencies");
        DistributorService { repo }
    }

    pub async fn create(
        &self,
        distributor: CreateDistributorModel,
    ) -> Result<DistributorEntity, error::SystemError> {
        let entity = self.repo.create(&InsertDistributor::from(distributor)).await?;
        info!("Distributor {} created", entity.id);
        Ok(entity)
    }
}
