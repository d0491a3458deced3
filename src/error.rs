use thiserror::Error;

/// Errors that can occur during fridge scan operations
#[derive(Error, Debug)]
pub enum FridgecipeError {
    /// Failed to reach the completion service
    #[error("Request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    /// The completion service returned a non-success status
    #[error("Completion service error ({status}): {body}")]
    ServiceError { status: u16, body: String },

    /// The completion response did not contain usable message content
    #[error("Malformed completion response: {0}")]
    PayloadError(String),

    /// No API credential available in config or environment
    #[error("API key not found in config or environment")]
    MissingApiKey,

    /// Servings count outside the supported 1-6 range
    #[error("Servings must be between 1 and 6, got {0}")]
    InvalidServings(u32),

    /// Failed to read the image input
    #[error("Failed to read image: {0}")]
    ImageError(#[from] std::io::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
