use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("fragment '{input}' contains an invalid percent escape at byte {index}")]
    InvalidPercentEncoding { input: String, index: usize },
    #[error("fragment '{input}' is not valid UTF-8 after percent decoding")]
    InvalidUtf8AfterDecoding { input: String },
}

pub type PathResult<T> = Result<T, PathError>;
