use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern '{pattern}' uses the wildcard as the resource of component {index}")]
    WildcardResource { pattern: String, index: usize },
    #[error("wildcard token '{wildcard}' must be non-empty and must not contain '/'")]
    InvalidWildcard { wildcard: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
