//! Error types for the database layer

use thiserror::Error;

/// User-specific database errors
#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Product catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Offer-specific database errors
#[derive(Debug, Error)]
pub enum OfferError {
    #[error("Not found")]
    OfferNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
