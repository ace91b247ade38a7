use thiserror::Error;

#[derive(Error, Debug)]
pub enum CertIndexError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Rate limit or quota exceeded: {0}")]
    RateLimited(String),

    #[error("Censys API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Censys request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Search result is missing field `{0}`")]
    MissingField(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CertIndexError {
    /// Process exit code: 1 for configuration, 2 for upstream, 3 for I/O.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 1,
            Self::Auth(_)
            | Self::RateLimited(_)
            | Self::Api { .. }
            | Self::Http(_)
            | Self::MissingField(_)
            | Self::Json(_) => 2,
            Self::Io(_) | Self::Csv(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CertIndexError>;
