use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::products::models::Product;

/// Response DTO for product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub category_id: Option<i32>,
    pub description: String,
    pub color: Option<String>,
    pub stock: i32,
    pub featured: bool,
    pub image_url: Option<String>,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            category_id: p.category_id,
            description: p.description,
            color: p.color,
            stock: p.stock,
            featured: p.featured,
            image_url: p.image_url,
        }
    }
}
