//! Shared helpers for router-level tests: in-memory store implementations
//! and a test server wired like the production router.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum_test::TestServer;
use jsonwebtoken::{encode, EncodingKey, Header};
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::core::store::{StoreError, StoreResult};
use crate::features::auth::{Claims, JwtValidator};
use crate::features::categories::models::{Category, NewCategory};
use crate::features::categories::routes;
use crate::features::categories::services::CategoryService;
use crate::features::categories::stores::CategoryStore;
use crate::features::products::models::Product;
use crate::features::products::stores::ProductStore;

pub const TEST_JWT_SECRET: &str = "router-test-secret";
pub const TEST_ISSUER: &str = "https://auth.test";
pub const TEST_AUDIENCE: &str = "catalog-core";

/// In-memory category store with store-assigned sequential ids.
#[derive(Default)]
pub struct InMemoryCategoryStore {
    inner: RwLock<CategoryRows>,
}

#[derive(Default)]
struct CategoryRows {
    rows: BTreeMap<i32, Category>,
    next_id: i32,
}

#[async_trait]
impl CategoryStore for InMemoryCategoryStore {
    async fn list(&self) -> StoreResult<Vec<Category>> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> StoreResult<Option<Category>> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, category: NewCategory) -> StoreResult<Category> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let created = Category {
            id: inner.next_id,
            name: category.name,
            description: category.description,
        };
        inner.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: i32, category: NewCategory) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        match inner.rows.get_mut(&id) {
            Some(row) => {
                row.name = category.name;
                row.description = category.description;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        self.inner
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

/// In-memory product store over a fixed product set.
#[derive(Default)]
pub struct InMemoryProductStore {
    products: Vec<Product>,
}

impl InMemoryProductStore {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list_by_category_id(&self, category_id: i32) -> StoreResult<Vec<Product>> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.category_id == Some(category_id))
            .cloned()
            .collect())
    }
}

/// Category store that fails every call with a fixed error kind.
pub struct FailingCategoryStore {
    error: StoreError,
}

impl FailingCategoryStore {
    pub fn new(error: StoreError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl CategoryStore for FailingCategoryStore {
    async fn list(&self) -> StoreResult<Vec<Category>> {
        Err(self.error.clone())
    }

    async fn get_by_id(&self, _id: i32) -> StoreResult<Option<Category>> {
        Err(self.error.clone())
    }

    async fn create(&self, _category: NewCategory) -> StoreResult<Category> {
        Err(self.error.clone())
    }

    async fn update(&self, _id: i32, _category: NewCategory) -> StoreResult<()> {
        Err(self.error.clone())
    }

    async fn delete(&self, _id: i32) -> StoreResult<()> {
        Err(self.error.clone())
    }
}

pub fn product(id: i32, category_id: Option<i32>) -> Product {
    Product {
        id,
        name: format!("product-{}", id),
        price: Decimal::new(1999, 2),
        category_id,
        description: "test product".to_string(),
        color: Some("black".to_string()),
        stock: 5,
        featured: false,
        image_url: None,
    }
}

pub fn mint_token(roles: &[&str]) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: "test-user".to_string(),
        iss: TEST_ISSUER.to_string(),
        aud: TEST_AUDIENCE.to_string(),
        iat: now as u64,
        exp: (now + 3600) as u64,
        roles: roles.iter().map(|r| r.to_string()).collect(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn test_validator() -> Arc<JwtValidator> {
    Arc::new(JwtValidator::new(
        TEST_JWT_SECRET,
        TEST_ISSUER.to_string(),
        TEST_AUDIENCE.to_string(),
        Duration::from_secs(30),
    ))
}

/// Build a test server over the real category router.
pub fn test_server(
    categories: Arc<dyn CategoryStore>,
    products: Arc<dyn ProductStore>,
) -> TestServer {
    let service = Arc::new(CategoryService::new(categories, products));
    TestServer::new(routes::routes(service, test_validator())).unwrap()
}
