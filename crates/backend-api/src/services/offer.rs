use marketplace_database::{
    CatalogError, NewOffer, Offer, OfferError, OfferRepository, OfferStatus, ProductRepository,
    SellerOffer, User,
};

use super::error::ServiceError;
use crate::routes::models::CreateOfferRequest;

/// Record an offer from the authenticated buyer.
///
/// The seller id is copied from the product so the offer stays addressed to
/// whoever listed it. When the product does not exist nothing is persisted.
pub async fn create_offer(
    products: &ProductRepository,
    offers: &OfferRepository,
    buyer: &User,
    req: CreateOfferRequest,
) -> Result<Offer, ServiceError> {
    let product = products
        .find_by_id(&req.product_id)
        .await?
        .ok_or(CatalogError::ProductNotFound)?;

    let offer = offers
        .create(&NewOffer {
            product_id: product.id,
            buyer_id: buyer.id.clone(),
            seller_id: product.seller_id,
            buyer_name: req.buyer_name,
            offer_price: req.offer_price,
        })
        .await?;

    Ok(offer)
}

pub async fn list_offers_for_seller(
    offers: &OfferRepository,
    seller_id: &str,
) -> Result<Vec<SellerOffer>, ServiceError> {
    Ok(offers.list_for_seller(seller_id).await?)
}

/// Overwrite an offer's status. Only the seller the offer is addressed to
/// may respond, but any status can be written over any other; an accepted
/// offer can still be rejected afterwards.
pub async fn set_offer_status(
    offers: &OfferRepository,
    caller_id: &str,
    offer_id: &str,
    status: OfferStatus,
) -> Result<Offer, ServiceError> {
    let offer = offers
        .find_by_id(offer_id)
        .await?
        .ok_or(OfferError::OfferNotFound)?;

    if offer.seller_id != caller_id {
        return Err(ServiceError::Forbidden);
    }

    Ok(offers.update_status(offer_id, status).await?)
}
