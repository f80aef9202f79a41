// src/db/categories.rs

use sqlx::AnyPool;

use crate::models::category::Category;

/// Categories created by `seed_defaults` on a fresh database.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

pub async fn list_all(pool: &AnyPool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &AnyPool, id: i64) -> sqlx::Result<Option<Category>> {
    sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert(pool: &AnyPool, kind: &str) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>("INSERT INTO categories (type) VALUES ($1) RETURNING id")
        .bind(kind.to_string())
        .fetch_one(pool)
        .await
}

/// Deletes a category together with its questions in one transaction.
///
/// Returns the number of questions removed, or `None` if the category does not exist.
pub async fn delete_with_questions(pool: &AnyPool, id: i64) -> sqlx::Result<Option<u64>> {
    let mut tx = pool.begin().await?;

    let removed_questions = sqlx::query("DELETE FROM questions WHERE category = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let removed_categories = sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if removed_categories == 0 {
        // Dropping the transaction rolls it back.
        return Ok(None);
    }

    tx.commit().await?;
    Ok(Some(removed_questions))
}

/// Inserts [`DEFAULT_CATEGORIES`] when the table is empty.
/// Returns how many categories were created.
pub async fn seed_defaults(pool: &AnyPool) -> sqlx::Result<usize> {
    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;

    if existing > 0 {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    for kind in DEFAULT_CATEGORIES {
        sqlx::query("INSERT INTO categories (type) VALUES ($1)")
            .bind(kind)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    tracing::info!("Seeded {} default categories", DEFAULT_CATEGORIES.len());
    Ok(DEFAULT_CATEGORIES.len())
}
