//! Request payloads shared across route handlers.

use marketplace_database::{ListingType, OfferStatus};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub location: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default = "CreateProductRequest::default_listing_type")]
    pub listing_type: ListingType,
}

impl CreateProductRequest {
    fn default_listing_type() -> ListingType {
        ListingType::Sale
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfferRequest {
    pub product_id: String,
    pub buyer_name: String,
    pub offer_price: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOfferStatusRequest {
    pub status: OfferStatus,
}
