// src/handlers/mod.rs

use crate::error::AppError;

pub mod categories;
pub mod questions;
pub mod quiz;

/// Fallback for paths no route matches.
pub async fn not_found() -> AppError {
    AppError::NotFound("Resource not found".to_string())
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
