use thiserror::Error;

#[derive(Error, Debug)]
pub enum BddGenError {
    #[error("Please enter some requirements")]
    EmptyRequirements,

    #[error("No Gemini API key configured (set GEMINI_API_KEY or pass --api-key)")]
    MissingApiKey,

    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("API response contained no generated text")]
    NoResponseData,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed API response: {0}")]
    Json(#[from] serde_json::Error),
}

impl BddGenError {
    /// True for failures of the completion backend call, as opposed to input
    /// or local configuration problems.
    pub fn is_backend(&self) -> bool {
        matches!(
            self,
            Self::MissingApiKey
                | Self::Api { .. }
                | Self::NoResponseData
                | Self::Network(_)
                | Self::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BddGenError>;
