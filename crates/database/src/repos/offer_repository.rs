//! Offer repository for database operations.

use crate::entities::{NewOffer, Offer, OfferStatus, ProductSummary, SellerOffer};
use crate::types::{OfferError, OfferResult};
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const OFFER_COLUMNS: &str =
    "id, product_id, buyer_id, seller_id, buyer_name, offer_price, status, created_at";

/// Repository for offer database operations
#[derive(Clone)]
pub struct OfferRepository {
    pool: SqlitePool,
}

impl OfferRepository {
    /// Create a new offer repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create new offer, starting out pending
    pub async fn create(&self, new_offer: &NewOffer) -> OfferResult<Offer> {
        let id = cuid2::create_id();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO offers (id, product_id, buyer_id, seller_id, buyer_name, offer_price, status, created_at) VALUES (?, ?, ?, ?, ?, ?, 'pending', ?)"
        )
        .bind(&id)
        .bind(&new_offer.product_id)
        .bind(&new_offer.buyer_id)
        .bind(&new_offer.seller_id)
        .bind(&new_offer.buyer_name)
        .bind(new_offer.offer_price)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| OfferError::DatabaseError(e.to_string()))?;

        Ok(Offer {
            id,
            product_id: new_offer.product_id.clone(),
            buyer_id: new_offer.buyer_id.clone(),
            seller_id: new_offer.seller_id.clone(),
            buyer_name: new_offer.buyer_name.clone(),
            offer_price: new_offer.offer_price,
            status: OfferStatus::Pending,
            created_at: now,
        })
    }

    /// Find offer by ID
    pub async fn find_by_id(&self, id: &str) -> OfferResult<Option<Offer>> {
        let query = format!("SELECT {OFFER_COLUMNS} FROM offers WHERE id = ?");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| OfferError::DatabaseError(e.to_string()))?;

        Ok(row.map(|row| row_to_offer(&row)))
    }

    /// List offers received by one seller, newest first, each joined with a
    /// summary of the product it was made on.
    pub async fn list_for_seller(&self, seller_id: &str) -> OfferResult<Vec<SellerOffer>> {
        let rows = sqlx::query(
            r#"
            SELECT o.id, o.product_id, o.buyer_id, o.seller_id, o.buyer_name, o.offer_price, o.status, o.created_at,
                   p.title AS product_title, p.image_url AS product_image_url, p.price AS product_price
            FROM offers o
            JOIN products p ON p.id = o.product_id
            WHERE o.seller_id = ?
            ORDER BY o.created_at DESC
            "#,
        )
        .bind(seller_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| OfferError::DatabaseError(e.to_string()))?;

        let offers = rows
            .iter()
            .map(|row| SellerOffer {
                offer: row_to_offer(row),
                product: ProductSummary {
                    title: row.get("product_title"),
                    image_url: row.get("product_image_url"),
                    price: row.get("product_price"),
                },
            })
            .collect();

        Ok(offers)
    }

    /// Overwrite the status of an offer
    pub async fn update_status(&self, id: &str, status: OfferStatus) -> OfferResult<Offer> {
        let result = sqlx::query("UPDATE offers SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| OfferError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(OfferError::OfferNotFound);
        }

        self.find_by_id(id).await?.ok_or(OfferError::OfferNotFound)
    }
}

fn row_to_offer(row: &SqliteRow) -> Offer {
    Offer {
        id: row.get("id"),
        product_id: row.get("product_id"),
        buyer_id: row.get("buyer_id"),
        seller_id: row.get("seller_id"),
        buyer_name: row.get("buyer_name"),
        offer_price: row.get("offer_price"),
        status: OfferStatus::from(row.get::<String, _>("status").as_str()),
        created_at: row.get("created_at"),
    }
}
