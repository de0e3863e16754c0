use axum::http::StatusCode;

/// Errors raised by the nutrition core.
///
/// Degenerate arithmetic (zero goals, zero servings) never shows up here: it is
/// resolved to sentinel values where it happens.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum NutritionError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),
}

impl NutritionError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

/// Maps a core error to the `(StatusCode, String)` rejection used by every handler.
pub fn reject(e: NutritionError) -> (StatusCode, String) {
    match e {
        NutritionError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
        NutritionError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
    }
}

pub type Result<T> = std::result::Result<T, NutritionError>;
