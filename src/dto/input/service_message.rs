use crate::dto::ServiceType;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ServiceMessage {
    pub message: String,
    pub service_type: ServiceType,
    pub user_ids: Vec<String>,
}
