use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Malformed issue form: {0}")]
    Malformed(String),

    #[error("Title must be set")]
    EmptyTitle,
}

pub type Result<T> = std::result::Result<T, FormError>;
