//! Offer entity definitions

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle state of an offer. New offers always start out pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    Pending,
    Accepted,
    Rejected,
}

impl OfferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferStatus::Pending => "pending",
            OfferStatus::Accepted => "accepted",
            OfferStatus::Rejected => "rejected",
        }
    }
}

impl From<&str> for OfferStatus {
    fn from(s: &str) -> Self {
        match s {
            "accepted" => OfferStatus::Accepted,
            "rejected" => OfferStatus::Rejected,
            _ => OfferStatus::Pending,
        }
    }
}

/// A purchase offer on a product. The seller id and buyer name are copied
/// from the product and buyer account when the offer is created.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub product_id: String,
    pub buyer_id: String,
    pub seller_id: String,
    pub buyer_name: String,
    pub offer_price: f64,
    pub status: OfferStatus,
    pub created_at: String,
}

/// Column values for inserting a new offer.
#[derive(Debug, Clone)]
pub struct NewOffer {
    pub product_id: String,
    pub buyer_id: String,
    pub seller_id: String,
    pub buyer_name: String,
    pub offer_price: f64,
}

/// Product fields attached to an offer in seller-facing listings.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub title: String,
    pub image_url: String,
    pub price: f64,
}

/// An offer joined with a summary of the product it was made on.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SellerOffer {
    #[serde(flatten)]
    pub offer: Offer,
    pub product: ProductSummary,
}
