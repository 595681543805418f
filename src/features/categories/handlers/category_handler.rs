use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, ErrorResponse, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::services::CategoryService;
use crate::features::products::dtos::ProductResponseDto;

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponseDto>),
        (status = 500, description = "Store failure")
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<Vec<CategoryResponseDto>>> {
    let categories = service.list().await?;
    Ok(Json(categories))
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponseDto),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i32>,
) -> Result<Json<CategoryResponseDto>> {
    let category = service.get_by_id(id).await?;
    Ok(Json(category))
}

/// List the products in a category
#[utoipa::path(
    get,
    path = "/categories/{id}/products",
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Products in the category", body = Vec<ProductResponseDto>),
        (status = 404, description = "No products for this category id", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_category_products(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<ProductResponseDto>>> {
    let products = service.list_products(id).await?;
    Ok(Json(products))
}

/// Create a category (admin only)
#[utoipa::path(
    post,
    path = "/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    ),
    tag = "categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_category(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<CategoryResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = service.create(dto).await?;

    tracing::info!("Category {} created by {}", created.id, user.sub);

    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace a category (admin only)
#[utoipa::path(
    put,
    path = "/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 204, description = "Category replaced"),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_category(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<UpdateCategoryDto>,
) -> Result<StatusCode> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.update(id, dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a category (admin only)
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_category(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    service.delete(id).await?;

    tracing::info!("Category {} deleted by {}", id, user.sub);

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use fake::faker::lorem::en::Word;
    use fake::Fake;
    use serde_json::json;

    use crate::core::error::ErrorResponse;
    use crate::core::store::StoreError;
    use crate::features::categories::dtos::CategoryResponseDto;
    use crate::features::categories::models::NewCategory;
    use crate::features::products::dtos::ProductResponseDto;
    use crate::shared::test_helpers::{
        mint_token, product, test_server, FailingCategoryStore, InMemoryCategoryStore,
        InMemoryProductStore,
    };

    fn stores() -> (Arc<InMemoryCategoryStore>, Arc<InMemoryProductStore>) {
        (
            Arc::new(InMemoryCategoryStore::default()),
            Arc::new(InMemoryProductStore::default()),
        )
    }

    async fn seed(store: &InMemoryCategoryStore, name: &str, description: &str) -> i32 {
        use crate::features::categories::stores::CategoryStore;
        store
            .create(NewCategory {
                name: name.to_string(),
                description: description.to_string(),
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn list_categories_returns_the_stored_set() {
        let (categories, products) = stores();
        seed(&categories, "Electronics", "Gadgets").await;
        seed(&categories, "Books", "Paper things").await;
        let server = test_server(categories, products);

        let res = server.get("/categories").await;

        res.assert_status_ok();
        let body: Vec<CategoryResponseDto> = res.json();
        let mut names: Vec<String> = body.into_iter().map(|c| c.name).collect();
        names.sort();
        assert_eq!(names, vec!["Books".to_string(), "Electronics".to_string()]);
    }

    #[tokio::test]
    async fn get_category_returns_matching_record() {
        let (categories, products) = stores();
        let id = seed(&categories, "Electronics", "Gadgets").await;
        let server = test_server(categories, products);

        let res = server.get(&format!("/categories/{}", id)).await;

        res.assert_status_ok();
        let body: CategoryResponseDto = res.json();
        assert_eq!(body.id, id);
        assert_eq!(body.name, "Electronics");
        assert_eq!(body.description, "Gadgets");
    }

    #[tokio::test]
    async fn get_category_unknown_id_is_not_found() {
        let (categories, products) = stores();
        let server = test_server(categories, products);

        let res = server.get("/categories/999").await;

        res.assert_status_not_found();
    }

    #[tokio::test]
    async fn products_are_filtered_by_category_id() {
        let (categories, _) = stores();
        let id = seed(&categories, "Electronics", "Gadgets").await;
        let products = Arc::new(InMemoryProductStore::with_products(vec![
            product(1, Some(id)),
            product(2, Some(id)),
            product(3, Some(id + 1)),
            product(4, None),
        ]));
        let server = test_server(categories, products);

        let res = server.get(&format!("/categories/{}/products", id)).await;

        res.assert_status_ok();
        let body: Vec<ProductResponseDto> = res.json();
        let mut ids: Vec<i32> = body.into_iter().map(|p| p.id).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn empty_category_products_is_not_found_with_id_in_message() {
        let (categories, products) = stores();
        seed(&categories, "Electronics", "Gadgets").await;
        let server = test_server(categories, products);

        let res = server.get("/categories/42/products").await;

        res.assert_status_not_found();
        let body: ErrorResponse = res.json();
        assert!(body.message.contains("42"), "message was: {}", body.message);
    }

    #[tokio::test]
    async fn create_returns_created_with_fresh_id() {
        let (categories, products) = stores();
        let existing = seed(&categories, "Electronics", "Gadgets").await;
        let server = test_server(categories, products);
        let name: String = Word().fake();

        let res = server
            .post("/categories")
            .authorization_bearer(&mint_token(&["admin"]))
            .json(&json!({ "name": &name, "description": "made up" }))
            .await;

        res.assert_status(StatusCode::CREATED);
        let created: CategoryResponseDto = res.json();
        assert_ne!(created.id, existing);
        assert_eq!(created.name, name);

        let fetched: CategoryResponseDto = server
            .get(&format!("/categories/{}", created.id))
            .await
            .json();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, created.name);
        assert_eq!(fetched.description, created.description);
    }

    #[tokio::test]
    async fn create_ignores_client_supplied_id() {
        let (categories, products) = stores();
        let server = test_server(categories, products);

        let res = server
            .post("/categories")
            .authorization_bearer(&mint_token(&["admin"]))
            .json(&json!({ "id": 999, "name": "Garden", "description": "" }))
            .await;

        res.assert_status(StatusCode::CREATED);
        let created: CategoryResponseDto = res.json();
        assert_ne!(created.id, 999);
    }

    #[tokio::test]
    async fn create_with_empty_name_is_bad_request() {
        let (categories, products) = stores();
        let server = test_server(categories, products);

        let res = server
            .post("/categories")
            .authorization_bearer(&mint_token(&["admin"]))
            .json(&json!({ "name": "", "description": "" }))
            .await;

        res.assert_status_bad_request();
    }

    #[tokio::test]
    async fn create_without_token_is_unauthorized() {
        let (categories, products) = stores();
        let server = test_server(categories, products);

        let res = server
            .post("/categories")
            .json(&json!({ "name": "Garden", "description": "" }))
            .await;

        res.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn create_with_non_admin_role_is_forbidden() {
        let (categories, products) = stores();
        let server = test_server(categories, products);

        let res = server
            .post("/categories")
            .authorization_bearer(&mint_token(&["customer"]))
            .json(&json!({ "name": "Garden", "description": "" }))
            .await;

        res.assert_status_forbidden();
    }

    #[tokio::test]
    async fn forbidden_wins_over_payload_validation() {
        // The capability check runs before the body is even parsed
        let (categories, products) = stores();
        let server = test_server(categories, products);

        let res = server
            .post("/categories")
            .authorization_bearer(&mint_token(&["customer"]))
            .json(&json!({ "name": "" }))
            .await;

        res.assert_status_forbidden();
    }

    #[tokio::test]
    async fn update_is_visible_on_subsequent_get() {
        let (categories, products) = stores();
        let id = seed(&categories, "Electronics", "Gadgets").await;
        let server = test_server(categories, products);

        let res = server
            .put(&format!("/categories/{}", id))
            .authorization_bearer(&mint_token(&["admin"]))
            .json(&json!({ "name": "Audio", "description": "Speakers and amps" }))
            .await;

        res.assert_status(StatusCode::NO_CONTENT);

        let fetched: CategoryResponseDto = server.get(&format!("/categories/{}", id)).await.json();
        assert_eq!(fetched.name, "Audio");
        assert_eq!(fetched.description, "Speakers and amps");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let (categories, products) = stores();
        let server = test_server(categories, products);

        let res = server
            .put("/categories/999")
            .authorization_bearer(&mint_token(&["admin"]))
            .json(&json!({ "name": "Audio", "description": "" }))
            .await;

        res.assert_status_not_found();
    }

    #[tokio::test]
    async fn update_with_non_admin_role_is_forbidden() {
        let (categories, products) = stores();
        let id = seed(&categories, "Electronics", "Gadgets").await;
        let server = test_server(categories, products);

        let res = server
            .put(&format!("/categories/{}", id))
            .authorization_bearer(&mint_token(&["customer"]))
            .json(&json!({ "name": "Audio", "description": "" }))
            .await;

        res.assert_status_forbidden();
    }

    #[tokio::test]
    async fn delete_removes_the_category() {
        let (categories, products) = stores();
        let id = seed(&categories, "Electronics", "Gadgets").await;
        let server = test_server(categories, products);

        let res = server
            .delete(&format!("/categories/{}", id))
            .authorization_bearer(&mint_token(&["admin"]))
            .await;

        res.assert_status(StatusCode::NO_CONTENT);

        let res = server.get(&format!("/categories/{}", id)).await;
        res.assert_status_not_found();
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        // Must be 404, not a masked 500: the missing-id check happens before
        // the store delete and outside any failure translation.
        let (categories, products) = stores();
        let server = test_server(categories, products);

        let res = server
            .delete("/categories/999")
            .authorization_bearer(&mint_token(&["admin"]))
            .await;

        res.assert_status_not_found();
        let body: ErrorResponse = res.json();
        assert!(body.message.contains("999"), "message was: {}", body.message);
    }

    #[tokio::test]
    async fn delete_with_non_admin_role_is_forbidden() {
        let (categories, products) = stores();
        let id = seed(&categories, "Electronics", "Gadgets").await;
        let server = test_server(categories, products);

        let res = server
            .delete(&format!("/categories/{}", id))
            .authorization_bearer(&mint_token(&["customer"]))
            .await;

        res.assert_status_forbidden();
    }

    #[tokio::test]
    async fn unknown_store_failure_surfaces_as_internal_error() {
        let (_, products) = stores();
        let failing = Arc::new(FailingCategoryStore::new(StoreError::Unknown(
            "backend exploded".to_string(),
        )));
        let server = test_server(failing, products);

        let res = server.get("/categories").await;

        res.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = res.json();
        // 5xx bodies carry a generic message, never backend detail
        assert!(!body.message.contains("backend exploded"));
    }

    #[tokio::test]
    async fn unavailable_store_surfaces_as_service_unavailable() {
        let (_, products) = stores();
        let failing = Arc::new(FailingCategoryStore::new(StoreError::Unavailable(
            "pool timed out".to_string(),
        )));
        let server = test_server(failing, products);

        let res = server.get("/categories").await;

        res.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }
}
