use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    #[error("Missing 'text' in request body")]
    MissingText,

    #[error("Invalid upload record: {0}")]
    InvalidRecord(String),

    #[error("Failed to access object storage: {0}")]
    StorageError(String),

    #[error("Failed to decode object content: {0}")]
    DecodeError(String),

    #[error("Failed to synthesize speech: {0}")]
    SynthesisError(String),

    #[error("Failed to generate presigned URL: {0}")]
    PresignError(String),

    #[error("Failed to publish notification: {0}")]
    NotificationError(String),
}

impl RelayError {
    /// Whether this error comes from malformed caller input and maps to a 400.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, RelayError::InvalidBody(_) | RelayError::MissingText)
    }
}

impl From<std::string::FromUtf8Error> for RelayError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        RelayError::DecodeError(error.to_string())
    }
}
