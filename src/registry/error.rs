use crate::pattern::PatternError;
use crate::types::RouteKey;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("pattern '{pattern}' is already registered as route {existing_key}")]
    DuplicatePattern {
        pattern: String,
        existing_key: RouteKey,
    },
    #[error("route table is full ({limit} routes); cannot add '{pattern}'")]
    MaxRoutesExceeded { pattern: String, limit: RouteKey },
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
