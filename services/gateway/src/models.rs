use serde::{Deserialize, Serialize};
use types::errors::InputField;

#[derive(Debug, Clone, Deserialize)]
pub struct ClampRequest {
    pub field: InputField,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClampResponse {
    pub field: InputField,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
