use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::core::error::ErrorResponse;
use crate::features::categories::{dtos as category_dtos, handlers as category_handlers};
use crate::features::products::dtos as product_dtos;

#[derive(OpenApi)]
#[openapi(
    paths(
        category_handlers::list_categories,
        category_handlers::get_category,
        category_handlers::list_category_products,
        category_handlers::create_category,
        category_handlers::update_category,
        category_handlers::delete_category,
    ),
    components(
        schemas(
            category_dtos::CategoryResponseDto,
            category_dtos::CreateCategoryDto,
            category_dtos::UpdateCategoryDto,
            product_dtos::ProductResponseDto,
            ErrorResponse,
        )
    ),
    tags(
        (name = "categories", description = "Category catalog: reads are public, writes require the admin role"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "API documentation for the category catalog",
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
