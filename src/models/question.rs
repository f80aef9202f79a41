// src/models/question.rs

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::prelude::FromRow;
use validator::Validate;

use crate::error::AppError;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The question text. Unique across the table.
    pub question: String,

    /// The expected answer. Unique across the table.
    pub answer: String,

    pub difficulty: i64,

    /// Owning category, `None` once the category is gone.
    pub category: Option<i64>,
}

/// Body of `POST /questions`, as sent by the client.
///
/// `category` and `difficulty` accept either a JSON number or a numeric string.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub difficulty: Option<i64>,
}

/// A trimmed, validated question ready for insertion.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewQuestion {
    #[validate(length(min = 1, max = 1000))]
    pub question: String,
    #[validate(length(min = 1, max = 1000))]
    pub answer: String,
    #[validate(range(min = 1))]
    pub category: i64,
    #[validate(range(min = 1))]
    pub difficulty: i64,
}

impl CreateQuestionRequest {
    /// Checks required fields, trims the texts and validates the result.
    pub fn into_new_question(self) -> Result<NewQuestion, AppError> {
        let new_question = NewQuestion {
            question: required(self.question, "question")?.trim().to_string(),
            answer: required(self.answer, "answer")?.trim().to_string(),
            category: required(self.category, "category")?,
            difficulty: required(self.difficulty, "difficulty")?,
        };
        new_question.validate()?;
        Ok(new_question)
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Unprocessable(format!("Missing required field '{}'", field)))
}

/// Body of `POST /questions/search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl SearchRequest {
    /// Returns the trimmed search term, rejecting a missing or blank one.
    pub fn term(&self) -> Result<&str, AppError> {
        match self.search_term.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => Ok(term),
            _ => Err(AppError::Unprocessable(
                "searchTerm must be a non-empty string".to_string(),
            )),
        }
    }
}
