use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use marketplace_database::{Offer, SellerOffer};

use crate::{
    routes::models::{CreateOfferRequest, UpdateOfferStatusRequest},
    services::offer as offer_service,
    util::require_bearer,
    ApiError, AppState,
};

#[utoipa::path(
    post,
    path = "/api/offers",
    tag = "Offers",
    security(("bearerAuth" = [])),
    request_body = CreateOfferRequest,
    responses(
        (status = 201, description = "Offer recorded", body = Offer),
        (status = 401, description = "Authentication required", body = crate::error::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Failed to create offer", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_offer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateOfferRequest>,
) -> Result<(StatusCode, Json<Offer>), ApiError> {
    let token = require_bearer(&headers)?;
    let user = state.authenticate(&token).await?;

    let offer = offer_service::create_offer(state.products(), state.offers(), &user, req).await?;

    Ok((StatusCode::CREATED, Json(offer)))
}

#[utoipa::path(
    get,
    path = "/api/offers/my-offers",
    tag = "Offers",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Offers received by the current user, newest first", body = [SellerOffer]),
        (status = 401, description = "Authentication required", body = crate::error::ErrorResponse),
        (status = 500, description = "Failed to fetch offers", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_my_offers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<SellerOffer>>, ApiError> {
    let token = require_bearer(&headers)?;
    let user = state.authenticate(&token).await?;

    let offers = offer_service::list_offers_for_seller(state.offers(), &user.id).await?;

    Ok(Json(offers))
}

#[utoipa::path(
    patch,
    path = "/api/offers/{offer_id}",
    tag = "Offers",
    security(("bearerAuth" = [])),
    params(
        ("offer_id" = String, Path, description = "Offer identifier")
    ),
    request_body = UpdateOfferStatusRequest,
    responses(
        (status = 200, description = "Offer status updated", body = Offer),
        (status = 401, description = "Authentication required", body = crate::error::ErrorResponse),
        (status = 403, description = "Only the seller may respond to an offer", body = crate::error::ErrorResponse),
        (status = 404, description = "Offer not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Failed to update offer", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_offer_status(
    State(state): State<AppState>,
    Path(offer_id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<UpdateOfferStatusRequest>,
) -> Result<Json<Offer>, ApiError> {
    let token = require_bearer(&headers)?;
    let user = state.authenticate(&token).await?;

    let offer =
        offer_service::set_offer_status(state.offers(), &user.id, &offer_id, req.status).await?;

    Ok(Json(offer))
}
