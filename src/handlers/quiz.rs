// src/handlers/quiz.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::AnyPool;

use crate::{db, error::AppError, models::quiz::QuizRequest, utils::extract::ApiJson};

/// Serves the next quiz question.
///
/// Picks a random question outside `previous_questions`, within the requested
/// category if any. Answers `"question": null` once every candidate has been played.
pub async fn next_question(
    State(pool): State<AnyPool>,
    ApiJson(req): ApiJson<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let question =
        db::questions::random_excluding(&pool, req.excluded_ids(), req.category_filter()).await?;

    if question.is_none() {
        tracing::debug!(
            "Quiz exhausted after {} questions (category {:?})",
            req.excluded_ids().len(),
            req.category_filter()
        );
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "question": question,
    })))
}
