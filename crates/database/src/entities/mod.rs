//! Domain entities for the database layer
//!
//! Simplified entity definitions for use by the repository layer

pub mod user;
pub mod product;
pub mod offer;

// Re-export all entity types
pub use user::{User, NewUser};
pub use product::{Product, NewProduct, ListingType};
pub use offer::{Offer, NewOffer, OfferStatus, ProductSummary, SellerOffer};
