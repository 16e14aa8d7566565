use thiserror::Error;

/// Validation failures for caller-supplied item data
///
/// Detected before any mutation of the catalog, so a failed create has no
/// side effects.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Name length is outside the accepted 1-100 character range
    #[error("name must be between 1 and 100 characters, got {length}")]
    NameLength { length: usize },

    /// Price is zero, negative, or not a finite positive number
    #[error("price must be greater than zero, got {price}")]
    NonPositivePrice { price: f64 },
}

impl ValidationError {
    /// The input field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NameLength { .. } => "name",
            ValidationError::NonPositivePrice { .. } => "price",
        }
    }
}
