use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::core::store::StoreError;
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::stores::CategoryStore;
use crate::features::products::dtos::ProductResponseDto;
use crate::features::products::stores::ProductStore;

/// Service for category operations.
///
/// Holds the store interfaces it collaborates with; both are passed in at
/// startup.
pub struct CategoryService {
    categories: Arc<dyn CategoryStore>,
    products: Arc<dyn ProductStore>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryStore>, products: Arc<dyn ProductStore>) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// List all categories
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.categories.list().await.map_err(|e| {
            tracing::error!("Failed to list categories: {}", e);
            AppError::from(e)
        })?;

        Ok(categories.into_iter().map(Into::into).collect())
    }

    /// Get a category by id
    pub async fn get_by_id(&self, id: i32) -> Result<CategoryResponseDto> {
        let category = self.categories.get_by_id(id).await.map_err(|e| {
            tracing::error!("Failed to get category {}: {}", id, e);
            AppError::from(e)
        })?;

        category
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", id)))
    }

    /// List the products belonging to a category.
    ///
    /// An empty result is reported as NotFound with the category id in the
    /// message; the contract does not distinguish a category without
    /// products from an unknown category id.
    pub async fn list_products(&self, category_id: i32) -> Result<Vec<ProductResponseDto>> {
        let products = self
            .products
            .list_by_category_id(category_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list products for category {}: {}", category_id, e);
                AppError::from(e)
            })?;

        if products.is_empty() {
            return Err(AppError::NotFound(format!(
                "No products found for category id {}",
                category_id
            )));
        }

        Ok(products.into_iter().map(Into::into).collect())
    }

    /// Create a category; the store assigns the id.
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let created = self.categories.create(dto.into()).await.map_err(|e| {
            tracing::error!("Failed to create category: {}", e);
            AppError::from(e)
        })?;

        Ok(created.into())
    }

    /// Fully replace the category at `id`.
    pub async fn update(&self, id: i32, dto: UpdateCategoryDto) -> Result<()> {
        self.categories.update(id, dto.into()).await.map_err(|e| match e {
            StoreError::NotFound => {
                AppError::NotFound(format!("Category with id {} not found", id))
            }
            other => {
                tracing::error!("Failed to update category {}: {}", id, other);
                AppError::from(other)
            }
        })
    }

    /// Delete the category at `id`, verifying existence first so that an
    /// unknown id is reported as NotFound rather than a store failure.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let existing = self.categories.get_by_id(id).await.map_err(|e| {
            tracing::error!("Failed to get category {}: {}", id, e);
            AppError::from(e)
        })?;

        if existing.is_none() {
            return Err(AppError::NotFound(format!(
                "Category with id {} not found",
                id
            )));
        }

        self.categories.delete(id).await.map_err(|e| match e {
            StoreError::NotFound => {
                AppError::NotFound(format!("Category with id {} not found", id))
            }
            other => {
                tracing::error!("Failed to delete category {}: {}", id, other);
                AppError::from(other)
            }
        })
    }
}
