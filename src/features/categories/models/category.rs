use sqlx::FromRow;

/// Database model for category
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Field values for creating or fully replacing a category.
/// Ids are assigned by the store and never supplied by callers.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}
