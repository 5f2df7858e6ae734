use thiserror::Error;

use crate::domain::validation::ValidationError;

/// Top-level error for all product-related operations
#[derive(Debug, Clone, Error)]
pub enum ProductError {
    #[error("Invalid product: {0}")]
    Validation(#[from] ValidationError),

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Product already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
