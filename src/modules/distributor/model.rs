use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct CreateDistributorModel {
    #[validate(length(min = 1, message = "Distributor name cannot be empty"))]
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

pub struct InsertDistributor {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl From<CreateDistributorModel> for InsertDistributor {
    fn from(model: CreateDistributorModel) -> Self {
        InsertDistributor { name: model.name, address: model.address, phone: model.phone }
    }
}
