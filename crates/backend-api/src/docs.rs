use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::root,
        crate::routes::health::health_check,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::products::list_products,
        crate::routes::products::list_my_products,
        crate::routes::products::get_product,
        crate::routes::products::create_product,
        crate::routes::products::mark_product_sold,
        crate::routes::offers::create_offer,
        crate::routes::offers::list_my_offers,
        crate::routes::offers::update_offer_status
    ),
    components(
        schemas(
            crate::error::ErrorResponse,
            crate::routes::health::ApiInfoResponse,
            crate::routes::health::HealthResponse,
            crate::routes::auth::AuthResponse,
            crate::routes::auth::UserSummary,
            crate::routes::models::RegisterRequest,
            crate::routes::models::LoginRequest,
            crate::routes::models::CreateProductRequest,
            crate::routes::models::CreateOfferRequest,
            crate::routes::models::UpdateOfferStatusRequest,
            marketplace_database::Product,
            marketplace_database::ListingType,
            marketplace_database::Offer,
            marketplace_database::OfferStatus,
            marketplace_database::ProductSummary,
            marketplace_database::SellerOffer
        )
    ),
    tags(
        (name = "Health", description = "Service health endpoints"),
        (name = "Auth", description = "Account registration and login"),
        (name = "Products", description = "Marketplace listings"),
        (name = "Offers", description = "Purchase offers on listings")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        let schemes = &mut components.security_schemes;

        let mut scheme = SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer));
        if let SecurityScheme::Http(http) = &mut scheme {
            http.bearer_format = Some("Bearer".to_string());
        }

        schemes.insert("bearerAuth".to_string(), scheme);
    }
}
