use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

/// File metadata entity from database
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntity {
    pub id: Uuid,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub path: String,
    pub upload_date: chrono::DateTime<chrono::Utc>,
}
