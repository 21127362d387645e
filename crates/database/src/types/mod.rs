//! Shared types and result types for the database layer

pub mod errors;

// Re-export common types
pub use errors::{CatalogError, OfferError, UserError};

// Common result types
pub type UserResult<T> = Result<T, UserError>;
pub type CatalogResult<T> = Result<T, CatalogError>;
pub type OfferResult<T> = Result<T, OfferError>;
