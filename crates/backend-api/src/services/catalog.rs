use marketplace_database::{CatalogError, NewProduct, Product, ProductRepository, User};

use super::error::ServiceError;
use crate::routes::models::CreateProductRequest;

pub async fn list_products(products: &ProductRepository) -> Result<Vec<Product>, ServiceError> {
    Ok(products.list_all().await?)
}

pub async fn get_product(
    products: &ProductRepository,
    product_id: &str,
) -> Result<Product, ServiceError> {
    let product = products
        .find_by_id(product_id)
        .await?
        .ok_or(CatalogError::ProductNotFound)?;

    Ok(product)
}

pub async fn list_products_for_seller(
    products: &ProductRepository,
    seller_id: &str,
) -> Result<Vec<Product>, ServiceError> {
    Ok(products.list_for_seller(seller_id).await?)
}

/// Create a listing for the authenticated seller. The seller's name and
/// location are copied onto the product as they are now.
pub async fn create_product(
    products: &ProductRepository,
    seller: &User,
    req: CreateProductRequest,
) -> Result<Product, ServiceError> {
    if req.title.trim().is_empty() {
        return Err(ServiceError::bad_request("Title is required"));
    }
    if req.description.trim().is_empty() {
        return Err(ServiceError::bad_request("Description is required"));
    }
    if req.category.trim().is_empty() {
        return Err(ServiceError::bad_request("Category is required"));
    }
    if req.price <= 0.0 {
        return Err(ServiceError::bad_request("Price must be greater than zero"));
    }

    let product = products
        .create(&NewProduct {
            title: req.title,
            description: req.description,
            price: req.price,
            category: req.category,
            image_url: req.image_url,
            listing_type: req.listing_type,
            seller_id: seller.id.clone(),
            seller_name: seller.name.clone(),
            seller_location: seller.location.clone(),
        })
        .await?;

    Ok(product)
}

/// Flag a product as sold. Only the listing's seller may do this.
pub async fn mark_product_sold(
    products: &ProductRepository,
    seller_id: &str,
    product_id: &str,
) -> Result<Product, ServiceError> {
    let product = products
        .find_by_id(product_id)
        .await?
        .ok_or(CatalogError::ProductNotFound)?;

    if product.seller_id != seller_id {
        return Err(ServiceError::Forbidden);
    }

    Ok(products.mark_sold(product_id).await?)
}
