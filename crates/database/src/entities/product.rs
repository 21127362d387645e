//! Product entity definitions

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How a seller is willing to part with a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sale,
    Exchange,
    Both,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Sale => "sale",
            ListingType::Exchange => "exchange",
            ListingType::Both => "both",
        }
    }
}

impl From<&str> for ListingType {
    fn from(s: &str) -> Self {
        match s {
            "exchange" => ListingType::Exchange,
            "both" => ListingType::Both,
            _ => ListingType::Sale,
        }
    }
}

/// A marketplace listing. Seller name and location are copied from the
/// seller's account at creation time and do not track later profile edits.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image_url: String,
    pub listing_type: ListingType,
    pub seller_id: String,
    pub seller_name: String,
    pub seller_location: String,
    pub is_sold: bool,
    pub created_at: String,
}

/// Column values for inserting a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image_url: String,
    pub listing_type: ListingType,
    pub seller_id: String,
    pub seller_name: String,
    pub seller_location: String,
}
