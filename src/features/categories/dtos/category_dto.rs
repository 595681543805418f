use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::{Category, NewCategory};

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
        }
    }
}

/// Request DTO for creating a category. A client-supplied id is ignored;
/// the store assigns one.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl From<CreateCategoryDto> for NewCategory {
    fn from(dto: CreateCategoryDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}

/// Request DTO for replacing a category. All fields are written as given.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl From<UpdateCategoryDto> for NewCategory {
    fn from(dto: UpdateCategoryDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}
