//! Product repository for database operations.

use crate::entities::{ListingType, NewProduct, Product};
use crate::types::{CatalogError, CatalogResult};
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const PRODUCT_COLUMNS: &str = "id, title, description, price, category, image_url, listing_type, seller_id, seller_name, seller_location, is_sold, created_at";

/// Repository for product database operations
#[derive(Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Create a new product repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create new product
    pub async fn create(&self, new_product: &NewProduct) -> CatalogResult<Product> {
        let id = cuid2::create_id();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO products (id, title, description, price, category, image_url, listing_type, seller_id, seller_name, seller_location, is_sold, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, false, ?)"
        )
        .bind(&id)
        .bind(&new_product.title)
        .bind(&new_product.description)
        .bind(new_product.price)
        .bind(&new_product.category)
        .bind(&new_product.image_url)
        .bind(new_product.listing_type.as_str())
        .bind(&new_product.seller_id)
        .bind(&new_product.seller_name)
        .bind(&new_product.seller_location)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(Product {
            id,
            title: new_product.title.clone(),
            description: new_product.description.clone(),
            price: new_product.price,
            category: new_product.category.clone(),
            image_url: new_product.image_url.clone(),
            listing_type: new_product.listing_type,
            seller_id: new_product.seller_id.clone(),
            seller_name: new_product.seller_name.clone(),
            seller_location: new_product.seller_location.clone(),
            is_sold: false,
            created_at: now,
        })
    }

    /// Find product by ID
    pub async fn find_by_id(&self, id: &str) -> CatalogResult<Option<Product>> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(row.map(|row| row_to_product(&row)))
    }

    /// List all products, newest first
    pub async fn list_all(&self) -> CatalogResult<Vec<Product>> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC");
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(row_to_product).collect())
    }

    /// List products belonging to one seller, newest first
    pub async fn list_for_seller(&self, seller_id: &str) -> CatalogResult<Vec<Product>> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE seller_id = ? ORDER BY created_at DESC"
        );
        let rows = sqlx::query(&query)
            .bind(seller_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(row_to_product).collect())
    }

    /// Mark a product as sold
    pub async fn mark_sold(&self, id: &str) -> CatalogResult<Product> {
        let result = sqlx::query("UPDATE products SET is_sold = true WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::ProductNotFound);
        }

        self.find_by_id(id).await?.ok_or(CatalogError::ProductNotFound)
    }
}

fn row_to_product(row: &SqliteRow) -> Product {
    Product {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        price: row.get("price"),
        category: row.get("category"),
        image_url: row.get("image_url"),
        listing_type: ListingType::from(row.get::<String, _>("listing_type").as_str()),
        seller_id: row.get("seller_id"),
        seller_name: row.get("seller_name"),
        seller_location: row.get("seller_location"),
        is_sold: row.get("is_sold"),
        created_at: row.get("created_at"),
    }
}
