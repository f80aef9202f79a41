// src/db/questions.rs

use std::collections::HashSet;

use rand::seq::SliceRandom;
use sqlx::AnyPool;

use crate::{
    config::Backend,
    models::question::{NewQuestion, Question},
};

/// Returns one page of questions in insertion order.
pub async fn list_page(pool: &AnyPool, offset: i64, limit: i64) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, difficulty, category
        FROM questions
        ORDER BY id
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn count(pool: &AnyPool) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await
}

pub async fn find_by_id(pool: &AnyPool, id: i64) -> sqlx::Result<Option<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, difficulty, category
        FROM questions
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Inserts a validated question and returns its new id.
/// Duplicate texts and unknown categories surface as database constraint errors.
pub async fn insert(pool: &AnyPool, new_question: &NewQuestion) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO questions (question, answer, difficulty, category)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(new_question.question.clone())
    .bind(new_question.answer.clone())
    .bind(new_question.difficulty)
    .bind(new_question.category)
    .fetch_one(pool)
    .await
}

/// Deletes a question, returning whether a row was removed.
pub async fn delete(pool: &AnyPool, id: i64) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM questions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Case-insensitive substring match on the question text.
///
/// Postgres folds case with `ILIKE`. SQLite's `LIKE` only folds ASCII, so there
/// the rows are matched in Rust with Unicode lowercasing on both sides.
pub async fn search(pool: &AnyPool, backend: Backend, term: &str) -> sqlx::Result<Vec<Question>> {
    match backend {
        Backend::Postgres => {
            sqlx::query_as::<_, Question>(
                r#"
                SELECT id, question, answer, difficulty, category
                FROM questions
                WHERE question ILIKE $1 ESCAPE '\'
                ORDER BY id
                "#,
            )
            .bind(like_pattern(term))
            .fetch_all(pool)
            .await
        }
        Backend::Sqlite => {
            let needle = term.to_lowercase();
            let questions = list_all(pool).await?;
            Ok(questions
                .into_iter()
                .filter(|q| q.question.to_lowercase().contains(&needle))
                .collect())
        }
    }
}

async fn list_all(pool: &AnyPool) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, difficulty, category FROM questions ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

pub async fn list_by_category(pool: &AnyPool, category_id: i64) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, difficulty, category
        FROM questions
        WHERE category = $1
        ORDER BY id
        "#,
    )
    .bind(category_id)
    .fetch_all(pool)
    .await
}

/// Picks one random question whose id is not in `excluded`,
/// optionally restricted to a single category.
///
/// Exclusion happens in Rust so the statement's bind count stays fixed
/// however long the played list grows.
pub async fn random_excluding(
    pool: &AnyPool,
    excluded: &[i64],
    category_id: Option<i64>,
) -> sqlx::Result<Option<Question>> {
    let candidates: Vec<i64> = match category_id {
        Some(category_id) => {
            sqlx::query_scalar::<_, i64>("SELECT id FROM questions WHERE category = $1")
                .bind(category_id)
                .fetch_all(pool)
                .await?
        }
        None => {
            sqlx::query_scalar::<_, i64>("SELECT id FROM questions")
                .fetch_all(pool)
                .await?
        }
    };

    let excluded: HashSet<i64> = excluded.iter().copied().collect();
    let remaining: Vec<i64> = candidates
        .into_iter()
        .filter(|id| !excluded.contains(id))
        .collect();

    let picked = remaining.choose(&mut rand::thread_rng()).copied();
    match picked {
        Some(id) => find_by_id(pool, id).await,
        None => Ok(None),
    }
}

/// Escapes LIKE wildcards so the term matches literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}
