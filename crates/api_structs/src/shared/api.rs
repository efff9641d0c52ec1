use serde::{Deserialize, Serialize};

/// Body of every unsuccessful response
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        Self {
            success: false,
            message,
        }
    }
}
