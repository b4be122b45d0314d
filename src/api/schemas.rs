use serde::Serialize;
use utoipa::ToSchema;

/// Envelope returned by every failed request
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Human-readable error message
    #[schema(example = "Project not found")]
    pub message: String,
}

/// Success envelope that carries only a message
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Project deleted successfully!")]
    pub message: String,
}
