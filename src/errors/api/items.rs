use crate::errors::internal::ValidationError;
use poem_openapi::{payload::Json, ApiResponse, Object};

/// Standardized error response for item endpoints
#[derive(Object, Debug)]
pub struct ItemErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Name of the input field that caused the error
    pub field: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Item operation error types
#[derive(ApiResponse, Debug)]
pub enum ItemError {
    /// Item data failed field-level validation
    #[oai(status = 422)]
    ValidationFailed(Json<ItemErrorResponse>),
}

impl ItemError {
    /// Create a ValidationFailed error from a domain validation failure
    pub fn validation_failed(err: &ValidationError) -> Self {
        ItemError::ValidationFailed(Json(ItemErrorResponse {
            error: "validation_error".to_string(),
            message: err.to_string(),
            field: err.field().to_string(),
            status_code: 422,
        }))
    }
}

impl From<ValidationError> for ItemError {
    fn from(err: ValidationError) -> Self {
        ItemError::validation_failed(&err)
    }
}
