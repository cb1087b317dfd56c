use std::fmt;
use std::error::Error;

use crate::store::StoreError;
use crate::vacancy::error::ProviderError;

/// Unified application error.
///
/// Every layer (config, network, storage, terminal input) surfaces its
/// failures through this type so `main` can report them uniformly.
#[derive(Debug)]
pub enum AppError {
    Config(String),
    Network(String),
    Parse(String),
    Storage(String),
    Input(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Input(msg) => write!(f, "Input error: {}", msg),
        }
    }
}

impl Error for AppError {}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::FormatError { .. } => AppError::Parse(err.to_string()),
            ProviderError::NetworkError { .. } | ProviderError::HttpStatus { .. } => {
                AppError::Network(err.to_string())
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Input(err.to_string())
    }
}
