//! Capability guards for write operations.
//!
//! A guard is declared as an extractor on the handler it protects and runs
//! before the handler body. Authorization is a flat capability-set check on
//! the caller's roles, no hierarchy.

use axum::{extract::FromRequestParts, http::request::Parts};

use super::model::AuthenticatedUser;
use crate::core::error::AppError;

/// Role required for category writes.
pub const ADMIN_ROLE: &str = "admin";

/// Guard for admin-only operations.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdmin(user): RequireAdmin) { ... }
/// ```
pub struct RequireAdmin(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?;

        if !user.is_admin() {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }

        Ok(RequireAdmin(user.clone()))
    }
}
