//! Category catalog feature.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/categories` | No | List all categories |
//! | GET | `/categories/{id}` | No | Get a category by id |
//! | GET | `/categories/{id}/products` | No | List products in a category |
//! | POST | `/categories` | admin | Create a category |
//! | PUT | `/categories/{id}` | admin | Replace a category |
//! | DELETE | `/categories/{id}` | admin | Delete a category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use services::CategoryService;
pub use stores::{CategoryStore, PgCategoryStore};
