use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::core::middleware;
use crate::features::auth::JwtValidator;
use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the category catalog.
///
/// Reads are public; writes sit behind the bearer-token middleware and the
/// per-operation admin guard.
pub fn routes(service: Arc<CategoryService>, validator: Arc<JwtValidator>) -> Router {
    let public = Router::new()
        .route("/categories", get(handlers::list_categories))
        .route("/categories/{id}", get(handlers::get_category))
        .route(
            "/categories/{id}/products",
            get(handlers::list_category_products),
        )
        .with_state(Arc::clone(&service));

    let admin = Router::new()
        .route("/categories", post(handlers::create_category))
        .route(
            "/categories/{id}",
            put(handlers::update_category).delete(handlers::delete_category),
        )
        .route_layer(from_fn_with_state(validator, middleware::auth_middleware))
        .with_state(service);

    public.merge(admin)
}
