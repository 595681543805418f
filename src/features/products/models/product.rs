use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for product
#[derive(Debug, Clone, FromRow)]
pub struct Product {
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
