use thiserror::Error;

pub type Result<T> = std::result::Result<T, LitError>;

#[derive(Debug, Error)]
pub enum LitError {
    #[error("validation error: {0}")]
    Validation(String),
}
