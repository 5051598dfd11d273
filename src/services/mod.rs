//! Services Layer
//!
//! Business logic extracted from HTTP handlers. Every function takes a
//! `&DatabaseConnection` so it can be exercised directly in tests without
//! going through the router.

pub mod category_service;
pub mod customer_service;
pub mod order_service;
pub mod product_service;
pub mod stats_service;

use std::fmt;

/// Error type shared by all services.
#[derive(Debug)]
pub enum ServiceError {
    /// Store unreachable: startup connection failed or a call timed out
    Unavailable,
    /// Missing or malformed input, rejected before any store access
    Validation(String),
    /// Domain condition with a specific human message (duplicate name,
    /// category still in use)
    Conflict(String),
    /// Row does not exist
    NotFound,
    /// Any other store failure; detail is logged, client sees a generic message
    Database(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Unavailable => write!(f, "Data store unavailable"),
            ServiceError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ServiceError::Conflict(msg) => write!(f, "{}", msg),
            ServiceError::NotFound => write!(f, "Resource not found"),
            ServiceError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        ServiceError::Database(e.to_string())
    }
}

/// Whether a store error is a UNIQUE constraint violation. SQLite reports
/// these in the error text; sea-orm does not expose a structured code here.
pub fn is_unique_violation(e: &sea_orm::DbErr) -> bool {
    e.to_string().contains("UNIQUE constraint failed")
}
