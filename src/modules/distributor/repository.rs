use uuid::Uuid;

use crate::{
    api::error,
    modules::distributor::{model::InsertDistributor, schema::DistributorEntity},
};

#[async_trait::async_trait]
pub trait DistributorRepository {
    async fn create(
        &self,
        distributor: &InsertDistributor,
    ) -> Result<DistributorEntity, error::SystemError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<DistributorEntity>, error::SystemError>;
}
