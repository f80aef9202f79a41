// src/models/category.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    /// Display name of the category (e.g., "Science").
    /// Mapped from the database column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// The `{id: type}` mapping the client renders its category list from.
/// Keys serialize as strings, ordered by id.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// DTO for creating a new category.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100))]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_map_serializes_with_string_keys() {
        let categories = vec![
            Category {
                id: 2,
                kind: "Art".to_string(),
            },
            Category {
                id: 1,
                kind: "Science".to_string(),
            },
        ];

        let json = serde_json::to_value(category_map(categories)).unwrap();
        assert_eq!(json, serde_json::json!({"1": "Science", "2": "Art"}));
    }

    #[test]
    fn blank_category_type_fails_validation() {
        let request = CreateCategoryRequest {
            kind: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
