mod docs;
mod error;
mod services;
mod state;
mod util;

pub mod routes;

pub use docs::ApiDoc;
pub use error::ApiError;
pub use state::AppState;

use axum::{
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health_check))
        // Auth routes
        .route("/api/auth/register", post(routes::auth::register))
        .route("/api/auth/login", post(routes::auth::login))
        // Product routes
        .route("/api/products", get(routes::products::list_products))
        .route("/api/products", post(routes::products::create_product))
        .route(
            "/api/products/my-products",
            get(routes::products::list_my_products),
        )
        .route(
            "/api/products/:product_id",
            get(routes::products::get_product),
        )
        .route(
            "/api/products/:product_id/sold",
            patch(routes::products::mark_product_sold),
        )
        // Offer routes
        .route("/api/offers", post(routes::offers::create_offer))
        .route("/api/offers/my-offers", get(routes::offers::list_my_offers))
        .route(
            "/api/offers/:offer_id",
            patch(routes::offers::update_offer_status),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::PATCH,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}
