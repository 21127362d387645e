use marketplace_database::{CatalogError, OfferError};

#[derive(Debug)]
pub enum ServiceError {
    Forbidden,
    BadRequest(String),
    Catalog(CatalogError),
    Offer(OfferError),
}

impl ServiceError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }
}

impl From<CatalogError> for ServiceError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

impl From<OfferError> for ServiceError {
    fn from(err: OfferError) -> Self {
        Self::Offer(err)
    }
}

impl From<ServiceError> for crate::ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Forbidden => crate::ApiError::forbidden("Access denied"),
            ServiceError::BadRequest(msg) => crate::ApiError::bad_request(msg),
            ServiceError::Catalog(catalog_err) => crate::ApiError::from(catalog_err),
            ServiceError::Offer(offer_err) => crate::ApiError::from(offer_err),
        }
    }
}
