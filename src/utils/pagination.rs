// src/utils/pagination.rs

use serde::Deserialize;

use crate::error::AppError;

/// Query parameters for paginated listings.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

/// A validated, 1-indexed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: i64,
    pub size: i64,
}

impl Page {
    pub fn new(params: &PageParams, size: i64) -> Result<Self, AppError> {
        let number = params.page.unwrap_or(1);
        if number < 1 {
            return Err(AppError::Unprocessable(
                "page must be a positive integer".to_string(),
            ));
        }
        Ok(Self { number, size })
    }

    pub fn offset(&self) -> i64 {
        (self.number - 1).saturating_mul(self.size)
    }

    pub fn limit(&self) -> i64 {
        self.size
    }

    /// Number of rows this page holds out of `total`.
    pub fn len_of(&self, total: i64) -> i64 {
        (total - self.offset()).clamp(0, self.size)
    }

    /// Past the last page. The first page always exists, even for an empty table.
    pub fn is_out_of_range(&self, total: i64) -> bool {
        self.number > 1 && self.len_of(total) == 0
    }
}
