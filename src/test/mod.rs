//! In-memory repositories backing the handler and service tests.

use argon2::password_hash::{PasswordHasher, SaltString};
use rand::rngs::OsRng;
use std::sync::Mutex;
use uuid::Uuid;

use crate::{
    api::error,
    modules::{
        distributor::{
            model::InsertDistributor, repository::DistributorRepository,
            schema::DistributorEntity,
        },
        file_upload::{model::NewFile, repository::FileRepository, schema::FileEntity},
        fruit::{
            model::{
                DistributorName, DistributorRef, FruitResponse, FruitSummary, InsertFruit,
                UpdateFruit,
            },
            repository::FruitRepository,
            schema::FruitEntity,
        },
        user::{repository::UserRepository, schema::UserEntity},
    },
};

/// Argon2 PHC hash, as stored in `users.hash_password`.
pub fn hash_password(password: &str) -> Result<String, error::SystemError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2::Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

#[derive(Default)]
pub struct MemoryStore {
    distributors: Mutex<Vec<DistributorEntity>>,
    fruits: Mutex<Vec<FruitEntity>>,
    files: Mutex<Vec<FileEntity>>,
    users: Mutex<Vec<UserEntity>>,
}

impl MemoryStore {
    pub fn seed_distributor(&self, name: &str) -> Uuid {
        let now = chrono::Utc::now();
        let entity = DistributorEntity {
            id: Uuid::now_v7(),
            name: name.to_string(),
            address: Some("1 Orchard Road".to_string()),
            phone: None,
            created_at: now,
            updated_at: now,
        };
        let id = entity.id;
        self.distributors.lock().unwrap().push(entity);
        id
    }

    pub fn seed_fruit(&self, name: &str, quantity: i32, price: f64, id_distributor: Uuid) -> Uuid {
        let entity = new_fruit(&InsertFruit {
            name: name.to_string(),
            quantity,
            price,
            status: 0,
            image: None,
            description: Some(format!("{name} description")),
            id_distributor,
        });
        let id = entity.id;
        self.fruits.lock().unwrap().push(entity);
        id
    }

    pub fn seed_user(&self, email: &str, password: &str) -> Uuid {
        let hash = hash_password(password).unwrap();
        self.seed_user_with_hash(email, &hash)
    }

    pub fn seed_user_with_hash(&self, email: &str, hash: &str) -> Uuid {
        let entity = UserEntity {
            id: Uuid::now_v7(),
            email: email.to_string(),
            hash_password: hash.to_string(),
            created_at: chrono::Utc::now(),
        };
        let id = entity.id;
        self.users.lock().unwrap().push(entity);
        id
    }

    pub fn distributor_count(&self) -> usize {
        self.distributors.lock().unwrap().len()
    }

    pub fn fruit_count(&self) -> usize {
        self.fruits.lock().unwrap().len()
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    fn distributor(&self, id: &Uuid) -> Option<DistributorEntity> {
        self.distributors.lock().unwrap().iter().find(|d| d.id == *id).cloned()
    }

    fn detail(&self, fruit: FruitEntity) -> FruitResponse {
        let distributor = self.distributor(&fruit.id_distributor).map(|d| DistributorRef {
            id: d.id,
            name: d.name,
            address: d.address,
        });
        FruitResponse::new(fruit, distributor)
    }

    fn summary(&self, fruit: &FruitEntity) -> FruitSummary {
        FruitSummary {
            id: fruit.id,
            name: fruit.name.clone(),
            quantity: fruit.quantity,
            price: fruit.price,
            id_distributor: self
                .distributor(&fruit.id_distributor)
                .map(|d| DistributorName { id: d.id, name: d.name }),
        }
    }
}

fn new_fruit(fruit: &InsertFruit) -> FruitEntity {
    let now = chrono::Utc::now();
    FruitEntity {
        id: Uuid::now_v7(),
        name: fruit.name.clone(),
        quantity: fruit.quantity,
        price: fruit.price,
        status: fruit.status,
        image: fruit.image.clone(),
        description: fruit.description.clone(),
        id_distributor: fruit.id_distributor,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait::async_trait]
impl DistributorRepository for MemoryStore {
    async fn create(
        &self,
        distributor: &InsertDistributor,
    ) -> Result<DistributorEntity, error::SystemError> {
        let now = chrono::Utc::now();
        let entity = DistributorEntity {
            id: Uuid::now_v7(),
            name: distributor.name.clone(),
            address: distributor.address.clone(),
            phone: distributor.phone.clone(),
            created_at: now,
            updated_at: now,
        };
        self.distributors.lock().unwrap().push(entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<DistributorEntity>, error::SystemError> {
        Ok(self.distributor(id))
    }
}

#[async_trait::async_trait]
impl FruitRepository for MemoryStore {
    async fn create(&self, fruit: &InsertFruit) -> Result<FruitEntity, error::SystemError> {
        let entity = new_fruit(fruit);
        self.fruits.lock().unwrap().push(entity.clone());
        Ok(entity)
    }

    async fn find_all(&self) -> Result<Vec<FruitResponse>, error::SystemError> {
        let fruits = self.fruits.lock().unwrap().clone();
        Ok(fruits.into_iter().map(|f| self.detail(f)).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<FruitEntity>, error::SystemError> {
        Ok(self.fruits.lock().unwrap().iter().find(|f| f.id == *id).cloned())
    }

    async fn find_detail_by_id(
        &self,
        id: &Uuid,
    ) -> Result<Option<FruitResponse>, error::SystemError> {
        let fruit = self.fruits.lock().unwrap().iter().find(|f| f.id == *id).cloned();
        Ok(fruit.map(|f| self.detail(f)))
    }

    async fn find_by_price_range(
        &self,
        min_price: f64,
        max_price: f64,
    ) -> Result<Vec<FruitSummary>, error::SystemError> {
        let mut fruits: Vec<FruitEntity> = self
            .fruits
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.price >= min_price && f.price <= max_price)
            .cloned()
            .collect();
        fruits.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        Ok(fruits.iter().map(|f| self.summary(f)).collect())
    }

    async fn find_by_name_prefixes(
        &self,
        prefixes: &[&str],
    ) -> Result<Vec<FruitSummary>, error::SystemError> {
        let fruits: Vec<FruitEntity> = self
            .fruits
            .lock()
            .unwrap()
            .iter()
            .filter(|f| {
                let name = f.name.to_lowercase();
                prefixes.iter().any(|p| name.starts_with(&p.to_lowercase()))
            })
            .cloned()
            .collect();
        Ok(fruits.iter().map(|f| self.summary(f)).collect())
    }

    async fn update(
        &self,
        id: &Uuid,
        fruit: &UpdateFruit,
    ) -> Result<Option<FruitEntity>, error::SystemError> {
        let mut fruits = self.fruits.lock().unwrap();
        let Some(entity) = fruits.iter_mut().find(|f| f.id == *id) else {
            return Ok(None);
        };
        if let Some(name) = &fruit.name {
            entity.name = name.clone();
        }
        if let Some(quantity) = fruit.quantity {
            entity.quantity = quantity;
        }
        if let Some(price) = fruit.price {
            entity.price = price;
        }
        if let Some(status) = fruit.status {
            entity.status = status;
        }
        if let Some(image) = &fruit.image {
            entity.image = Some(image.clone());
        }
        if let Some(description) = &fruit.description {
            entity.description = Some(description.clone());
        }
        if let Some(id_distributor) = fruit.id_distributor {
            entity.id_distributor = id_distributor;
        }
        entity.updated_at = chrono::Utc::now();
        Ok(Some(entity.clone()))
    }

    async fn delete(&self, id: &Uuid) -> Result<Option<FruitEntity>, error::SystemError> {
        let mut fruits = self.fruits.lock().unwrap();
        let position = fruits.iter().position(|f| f.id == *id);
        Ok(position.map(|i| fruits.remove(i)))
    }
}

#[async_trait::async_trait]
impl FileRepository for MemoryStore {
    async fn create(&self, file: &NewFile) -> Result<FileEntity, error::SystemError> {
        let entity = FileEntity {
            id: Uuid::now_v7(),
            original_name: file.original_name.clone(),
            mime_type: file.mime_type.clone(),
            size: file.size,
            path: file.path.clone(),
            upload_date: chrono::Utc::now(),
        };
        self.files.lock().unwrap().push(entity.clone());
        Ok(entity)
    }
}

#[async_trait::async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>, error::SystemError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.email == email).cloned())
    }
}
