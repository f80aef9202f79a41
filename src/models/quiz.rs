// src/models/quiz.rs

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_option_number_from_string;

/// Body of `POST /quiz`.
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    /// Ids already served to the player in this round.
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,

    /// `None` or `0` plays across every category. Accepts `3` or `"3"`.
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub quiz_category_id: Option<i64>,
}

impl QuizRequest {
    pub fn category_filter(&self) -> Option<i64> {
        self.quiz_category_id.filter(|id| *id > 0)
    }

    pub fn excluded_ids(&self) -> &[i64] {
        self.previous_questions.as_deref().unwrap_or_default()
    }
}
