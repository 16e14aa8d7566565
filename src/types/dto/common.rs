use poem_openapi::Object;

/// Response model for the root status endpoint
#[derive(Object, Debug)]
pub struct StatusResponse {
    /// Welcome message
    pub message: String,

    /// Status of the service
    pub status: String,
}

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}
