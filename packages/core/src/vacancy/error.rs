//! Error types for vacancy validation and comparison

use thiserror::Error;

/// Errors raised while building or comparing vacancy records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VacancyError {
    #[error("Invalid vacancy field `{field}`: {message}")]
    Validation { field: &'static str, message: String },

    #[error("Cannot compare salary {left} with salary {right}: shapes differ")]
    Comparison { left: String, right: String },
}

/// Errors from vacancy sources (remote search APIs)
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("{url} returned HTTP {status}")]
    HttpStatus { status: u16, url: String },

    #[error("Data format error: {message}")]
    FormatError { message: String },
}

impl VacancyError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn comparison(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::Comparison {
            left: left.into(),
            right: right.into(),
        }
    }

    /// `true` for errors that reject a record at construction time.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
