use serde_json::error::Category;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Failed to parse order document: {0}")]
    ParseError(String),

    #[error("Invalid order document shape: {0}")]
    ShapeError(String),
}

impl OrderError {
    /// Builds a `ShapeError` for the element at `path`.
    pub fn shape(path: &str, reason: impl std::fmt::Display) -> Self {
        OrderError::ShapeError(format!("{path}: {reason}"))
    }

    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, OrderError::ParseError(_))
    }

    #[must_use]
    pub fn is_shape(&self) -> bool {
        matches!(self, OrderError::ShapeError(_))
    }
}

impl From<serde_json::Error> for OrderError {
    fn from(error: serde_json::Error) -> Self {
        match error.classify() {
            Category::Data => OrderError::ShapeError(error.to_string()),
            Category::Syntax | Category::Eof | Category::Io => {
                OrderError::ParseError(error.to_string())
            }
        }
    }
}
