use marketplace_auth::Authenticator;
use marketplace_database::{OfferRepository, ProductRepository, User};
use sqlx::SqlitePool;

use crate::ApiError;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    authenticator: Authenticator,
    products: ProductRepository,
    offers: OfferRepository,
}

impl AppState {
    pub fn new(pool: SqlitePool, authenticator: Authenticator) -> Self {
        Self {
            authenticator,
            products: ProductRepository::new(pool.clone()),
            offers: OfferRepository::new(pool),
        }
    }

    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    pub fn products(&self) -> &ProductRepository {
        &self.products
    }

    pub fn offers(&self) -> &OfferRepository {
        &self.offers
    }

    pub async fn authenticate(&self, token: &str) -> Result<User, ApiError> {
        self.authenticator
            .authenticate_token(token)
            .await
            .map_err(ApiError::from)
    }
}
