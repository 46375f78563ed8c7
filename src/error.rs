use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GROQ_API_KEY env var is required")]
    MissingApiKey,

    #[error("Completion API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Completion response contained no choices")]
    EmptyCompletion,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, PortalError>;
