use uuid::Uuid;

use crate::{
    api::error,
    modules::distributor::{
        model::InsertDistributor, repository::DistributorRepository, schema::DistributorEntity,
    },
};

#[derive(Clone)]
pub struct DistributorRepositoryPg {
    pool: sqlx::PgPool,
}

impl DistributorRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl DistributorRepository for DistributorRepositoryPg {
    async fn create(
        &self,
        distributor: &InsertDistributor,
    ) -> Result<DistributorEntity, error::SystemError> {
        let id = Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext));
        let entity = sqlx::query_as::<_, DistributorEntity>(
            r#"
            INSERT INTO distributors (id, name, address, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&distributor.name)
        .bind(&distributor.address)
        .bind(&distributor.phone)
        .fetch_one(&self.pool)
        .await?;
        Ok(entity)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<DistributorEntity>, error::SystemError> {
        let distributor =
            sqlx::query_as::<_, DistributorEntity>("SELECT * FROM distributors WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(distributor)
    }
}
