use uuid::Uuid;

use crate::{
    api::error,
    modules::fruit::{
        model::{
            FruitDetailRow, FruitResponse, FruitSummary, FruitSummaryRow, InsertFruit, UpdateFruit,
        },
        repository::FruitRepository,
        schema::FruitEntity,
    },
};

#[derive(Clone)]
pub struct FruitRepositoryPg {
    pool: sqlx::PgPool,
}

impl FruitRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl FruitRepository for FruitRepositoryPg {
    async fn create(&self, fruit: &InsertFruit) -> Result<FruitEntity, error::SystemError> {
        let id = Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext));
        let entity = sqlx::query_as::<_, FruitEntity>(
            r#"
            INSERT INTO fruits (id, name, quantity, price, status, image, description, id_distributor)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&fruit.name)
        .bind(fruit.quantity)
        .bind(fruit.price)
        .bind(fruit.status)
        .bind(&fruit.image)
        .bind(&fruit.description)
        .bind(fruit.id_distributor)
        .fetch_one(&self.pool)
        .await?;
        Ok(entity)
    }

    async fn find_all(&self) -> Result<Vec<FruitResponse>, error::SystemError> {
        let rows = sqlx::query_as::<_, FruitDetailRow>(
            r#"
            SELECT f.*, d.name AS distributor_name, d.address AS distributor_address
            FROM fruits f
            LEFT JOIN distributors d ON d.id = f.id_distributor
            ORDER BY f.created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(FruitResponse::from).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<FruitEntity>, error::SystemError> {
        let fruit = sqlx::query_as::<_, FruitEntity>("SELECT * FROM fruits WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(fruit)
    }

    async fn find_detail_by_id(
        &self,
        id: &Uuid,
    ) -> Result<Option<FruitResponse>, error::SystemError> {
        let row = sqlx::query_as::<_, FruitDetailRow>(
            r#"
            SELECT f.*, d.name AS distributor_name, d.address AS distributor_address
            FROM fruits f
            LEFT JOIN distributors d ON d.id = f.id_distributor
            WHERE f.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(FruitResponse::from))
    }

    async fn find_by_price_range(
        &self,
        min_price: f64,
        max_price: f64,
    ) -> Result<Vec<FruitSummary>, error::SystemError> {
        let rows = sqlx::query_as::<_, FruitSummaryRow>(
            r#"
            SELECT f.id, f.name, f.quantity, f.price, f.id_distributor, d.name AS distributor_name
            FROM fruits f
            LEFT JOIN distributors d ON d.id = f.id_distributor
            WHERE f.price >= $1 AND f.price <= $2
            ORDER BY f.quantity DESC
            "#,
        )
        .bind(min_price)
        .bind(max_price)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(FruitSummary::from).collect())
    }

    async fn find_by_name_prefixes(
        &self,
        prefixes: &[&str],
    ) -> Result<Vec<FruitSummary>, error::SystemError> {
        let prefixes: Vec<String> = prefixes.iter().map(|p| p.to_lowercase()).collect();
        let rows = sqlx::query_as::<_, FruitSummaryRow>(
            r#"
            SELECT f.id, f.name, f.quantity, f.price, f.id_distributor, d.name AS distributor_name
            FROM fruits f
            LEFT JOIN distributors d ON d.id = f.id_distributor
            WHERE lower(left(f.name, 1)) = ANY($1)
            ORDER BY f.created_at
            "#,
        )
        .bind(&prefixes)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(FruitSummary::from).collect())
    }

    async fn update(
        &self,
        id: &Uuid,
        fruit: &UpdateFruit,
    ) -> Result<Option<FruitEntity>, error::SystemError> {
        let entity = sqlx::query_as::<_, FruitEntity>(
            r#"
        UPDATE fruits
        SET
            name           = COALESCE($2, name),
            quantity       = COALESCE($3, quantity),
            price          = COALESCE($4, price),
            status         = COALESCE($5, status),
            image          = COALESCE($6, image),
            description    = COALESCE($7, description),
            id_distributor = COALESCE($8, id_distributor),
            updated_at     = NOW()
        WHERE id = $1
        RETURNING *
        "#,
        )
        .bind(id)
        .bind(&fruit.name)
        .bind(fruit.quantity)
        .bind(fruit.price)
        .bind(fruit.status)
        .bind(&fruit.image)
        .bind(&fruit.description)
        .bind(fruit.id_distributor)
        .fetch_optional(&self.pool)
        .await?;
        Ok(entity)
    }

    async fn delete(&self, id: &Uuid) -> Result<Option<FruitEntity>, error::SystemError> {
        let entity =
            sqlx::query_as::<_, FruitEntity>("DELETE FROM fruits WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(entity)
    }
}
