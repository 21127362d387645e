use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use marketplace_database::Product;

use crate::{
    routes::models::CreateProductRequest, services::catalog as catalog_service,
    util::require_bearer, ApiError, AppState,
};

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "All listings, newest first", body = [Product]),
        (status = 500, description = "Failed to fetch products", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = catalog_service::list_products(state.products()).await?;

    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/products/my-products",
    tag = "Products",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Listings created by the current user", body = [Product]),
        (status = 401, description = "Authentication required", body = crate::error::ErrorResponse),
        (status = 500, description = "Failed to fetch products", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_my_products(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Product>>, ApiError> {
    let token = require_bearer(&headers)?;
    let user = state.authenticate(&token).await?;

    let products = catalog_service::list_products_for_seller(state.products(), &user.id).await?;

    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/products/{product_id}",
    tag = "Products",
    params(
        ("product_id" = String, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "Product fetched", body = Product),
        (status = 404, description = "Product not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Failed to fetch product", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product = catalog_service::get_product(state.products(), &product_id).await?;

    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    security(("bearerAuth" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Listing created", body = Product),
        (status = 400, description = "Invalid product payload", body = crate::error::ErrorResponse),
        (status = 401, description = "Authentication required", body = crate::error::ErrorResponse),
        (status = 500, description = "Failed to create product", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let token = require_bearer(&headers)?;
    let user = state.authenticate(&token).await?;

    let product = catalog_service::create_product(state.products(), &user, req).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    patch,
    path = "/api/products/{product_id}/sold",
    tag = "Products",
    security(("bearerAuth" = [])),
    params(
        ("product_id" = String, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "Listing marked as sold", body = Product),
        (status = 401, description = "Authentication required", body = crate::error::ErrorResponse),
        (status = 403, description = "Only the seller may mark a listing sold", body = crate::error::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Failed to update product", body = crate::error::ErrorResponse)
    )
)]
pub async fn mark_product_sold(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Product>, ApiError> {
    let token = require_bearer(&headers)?;
    let user = state.authenticate(&token).await?;

    let product =
        catalog_service::mark_product_sold(state.products(), &user.id, &product_id).await?;

    Ok(Json(product))
}
