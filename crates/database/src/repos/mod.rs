//! Database repository implementations

pub mod offer_repository;
pub mod product_repository;
pub mod user_repository;

// Re-export all repositories for convenience
pub use offer_repository::*;
pub use product_repository::*;
pub use user_repository::*;
