// src/handlers/categories.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::AnyPool;
use validator::Validate;

use crate::{
    db,
    error::AppError,
    models::category::{CreateCategoryRequest, category_map},
    utils::extract::{ApiJson, ApiPath},
};

/// Lists all categories as an `{id: type}` mapping.
pub async fn list_categories(State(pool): State<AnyPool>) -> Result<impl IntoResponse, AppError> {
    let categories = db::categories::list_all(&pool).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "categories": category_map(categories),
    })))
}

/// Creates a new category. The name is trimmed and must be unique.
pub async fn create_category(
    State(pool): State<AnyPool>,
    ApiJson(mut payload): ApiJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.kind = payload.kind.trim().to_string();
    payload.validate()?;

    let id = db::categories::insert(&pool, &payload.kind).await?;
    tracing::info!("Created category {} ({})", id, payload.kind);

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({"success": true, "created": id})),
    ))
}

/// Deletes a category and every question filed under it.
pub async fn delete_category(
    State(pool): State<AnyPool>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let removed = db::categories::delete_with_questions(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

    tracing::info!("Deleted category {} and {} of its questions", id, removed);

    Ok(Json(serde_json::json!({
        "success": true,
        "deleted": id,
        "deleted_questions": removed,
    })))
}

/// Lists every question of a single category.
pub async fn questions_for_category(
    State(pool): State<AnyPool>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let category = db::categories::find_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

    let questions = db::questions::list_by_category(&pool, category.id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "total_questions": questions.len(),
        "questions": questions,
        "current_category": category.kind,
    })))
}
