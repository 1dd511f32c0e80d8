use serde::Serialize;

pub mod contact;

/// Body of every contact endpoint response.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}
