use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API rate limit exceeded")]
    RateLimited,

    #[error("Error: {status}")]
    UpstreamStatus { status: u16 },

    #[error("Invalid GitHub URL: {input}")]
    InvalidTarget { input: String },

    #[error("Malformed commit record: {0}")]
    MalformedCommit(#[from] serde_json::Error),

    #[error("Configuration error: {field}={value}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, HarvestError>;
