use crate::censys::auth::Credentials;
use crate::censys::DEFAULT_API_URL;
use std::path::PathBuf;

pub const DEFAULT_QUERY: &str = "parsed.names: censys.io and tags: trusted";
pub const DEFAULT_OUTPUT: &str = "certificates_index.csv";

/// Everything one export run needs
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub credentials: Credentials,
    pub api_url: String,
    pub query: String,
    pub output: PathBuf,
}

impl ExportConfig {
    /// Config with the default API URL, query and output path
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            api_url: DEFAULT_API_URL.to_string(),
            query: DEFAULT_QUERY.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}
