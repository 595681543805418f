//! Read-side product collaborator.
//!
//! Products are never created, updated, or deleted through this service;
//! they are only listed by category id from the category endpoint.

pub mod dtos;
pub mod models;
pub mod stores;

pub use stores::{PgProductStore, ProductStore};
