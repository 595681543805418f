use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::store::StoreResult;
use crate::features::products::models::Product;

/// Read-side store for products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// List the products whose category reference equals the given id.
    async fn list_by_category_id(&self, category_id: i32) -> StoreResult<Vec<Product>>;
}

pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list_by_category_id(&self, category_id: i32) -> StoreResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, category_id, description, color, stock, featured, image_url
            FROM products
            WHERE category_id = $1
            ORDER BY name
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}
