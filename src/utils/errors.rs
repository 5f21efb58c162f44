use thiserror::Error;

/// Failures that carry meaning for the caller, as opposed to plain store or
/// connectivity errors which travel as bare `anyhow::Error`s.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("author {0} does not exist")]
    MissingAuthor(i32),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound(entity.into())
    }
}
