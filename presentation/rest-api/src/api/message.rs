use poem_openapi::Object;

use crate::api::error::timestamp;

/// Confirmation body for successful deletes.
#[derive(Debug, Clone, Object)]
pub struct StandardMessageResponse {
    pub timestamp: String,
    pub status: String,
    pub message: String,
    pub path: String,
}

impl StandardMessageResponse {
    pub fn deleted(entity: &str, id: i64, path: &str) -> Self {
        Self {
            timestamp: timestamp(),
            status: "OK".to_string(),
            message: format!("{} ID: {} was deleted successfully", entity, id),
            path: path.to_string(),
        }
    }
}
