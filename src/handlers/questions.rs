// src/handlers/questions.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::AnyPool;

use crate::{
    config::Config,
    db,
    error::AppError,
    models::{
        category::category_map,
        question::{CreateQuestionRequest, SearchRequest},
    },
    utils::{
        extract::{ApiJson, ApiPath, ApiQuery},
        pagination::{Page, PageParams},
    },
};

/// Lists one page of questions in insertion order.
///
/// * Page size comes from `Config::questions_per_page`.
/// * Pages past the last one answer 404; the first page always exists.
/// * Includes the total question count and the category mapping for the client.
pub async fn list_questions(
    State(pool): State<AnyPool>,
    State(config): State<Config>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = Page::new(&params, config.questions_per_page)?;

    let total = db::questions::count(&pool).await?;
    if page.is_out_of_range(total) {
        return Err(AppError::NotFound(format!(
            "Page {} does not exist",
            page.number
        )));
    }

    let questions = db::questions::list_page(&pool, page.offset(), page.limit()).await?;
    let categories = db::categories::list_all(&pool).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "questions": questions,
        "total_questions": total,
        "categories": category_map(categories),
        "current_category": null,
    })))
}

/// Creates a new question.
///
/// Validation runs before the insert, so a rejected body leaves the table untouched.
/// Duplicate texts and unknown categories are reported as 422.
pub async fn create_question(
    State(pool): State<AnyPool>,
    ApiJson(payload): ApiJson<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_question = payload.into_new_question()?;

    let id = db::questions::insert(&pool, &new_question).await?;
    let total = db::questions::count(&pool).await?;

    tracing::info!("Created question {} in category {}", id, new_question.category);

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "created": id,
            "total_questions": total,
        })),
    ))
}

/// Deletes a question by ID.
pub async fn delete_question(
    State(pool): State<AnyPool>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !db::questions::delete(&pool, id).await? {
        return Err(AppError::NotFound(format!("Question {} not found", id)));
    }

    let total = db::questions::count(&pool).await?;
    tracing::info!("Deleted question {}", id);

    Ok(Json(serde_json::json!({
        "success": true,
        "deleted": id,
        "total_questions": total,
    })))
}

/// Case-insensitive substring search over the question text.
pub async fn search_questions(
    State(pool): State<AnyPool>,
    State(config): State<Config>,
    ApiJson(payload): ApiJson<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let term = payload.term()?;
    let questions = db::questions::search(&pool, config.backend(), term).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "total_questions": questions.len(),
        "questions": questions,
        "current_category": null,
    })))
}
