pub mod catalog;
pub mod error;
pub mod offer;

pub use error::*;
