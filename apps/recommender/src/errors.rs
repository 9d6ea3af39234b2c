use thiserror::Error;

/// Rejections raised by the view before a submission reaches the core.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown job level '{0}' (expected Entry, Mid or Senior)")]
    UnknownLevel(String),

    #[error("Unknown use case '{0}' (expected Hiring or Development)")]
    UnknownUseCase(String),
}
