use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::store::{StoreError, StoreResult};
use crate::features::categories::models::{Category, NewCategory};

/// Persistence boundary for categories.
///
/// Implementations translate backend failures into [`StoreError`] kinds;
/// callers never see a raw driver error.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn list(&self) -> StoreResult<Vec<Category>>;

    async fn get_by_id(&self, id: i32) -> StoreResult<Option<Category>>;

    /// Insert a category and return it with its store-assigned id.
    async fn create(&self, category: NewCategory) -> StoreResult<Category>;

    /// Fully replace the category at `id`. `NotFound` if no row matches.
    async fn update(&self, id: i32, category: NewCategory) -> StoreResult<()>;

    /// Delete the category at `id`. `NotFound` if no row matches.
    async fn delete(&self, id: i32) -> StoreResult<()>;
}

pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn list(&self) -> StoreResult<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name, description FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    async fn get_by_id(&self, id: i32) -> StoreResult<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, name, description FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(category)
    }

    async fn create(&self, category: NewCategory) -> StoreResult<Category> {
        let created = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name, description) VALUES ($1, $2) RETURNING id, name, description",
        )
        .bind(category.name)
        .bind(category.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, id: i32, category: NewCategory) -> StoreResult<()> {
        let result = sqlx::query("UPDATE categories SET name = $1, description = $2 WHERE id = $3")
            .bind(category.name)
            .bind(category.description)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
