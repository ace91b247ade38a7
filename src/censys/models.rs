use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Upstream fields requested from the certificate index
pub const SUBJECT_DN_FIELD: &str = "parsed.subject_dn";
pub const VALIDITY_FIELD: &str = "parsed.validity";
pub const FINGERPRINT_SHA256_FIELD: &str = "parsed.fingerprint_sha256";
pub const VALIDITY_START_FIELD: &str = "parsed.validity.start";
pub const VALIDITY_END_FIELD: &str = "parsed.validity.end";

pub const SEARCH_FIELDS: [&str; 3] = [SUBJECT_DN_FIELD, VALIDITY_FIELD, FINGERPRINT_SHA256_FIELD];

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    pub page: u32,
    pub fields: &'a [&'a str],
    pub flatten: bool,
}

impl<'a> SearchRequest<'a> {
    /// First page of `query`, with flattened field names
    pub fn new(query: &'a str) -> Self {
        Self {
            query,
            page: 1,
            fields: &SEARCH_FIELDS,
            flatten: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchMetadata {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub pages: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Map<String, Value>>,
    #[serde(default)]
    pub metadata: SearchMetadata,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Quota {
    pub used: u64,
    pub allowance: u64,
    #[serde(default)]
    pub resets_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub email: String,
    pub quota: Quota,
}

/// Error body returned with non-success status codes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Human-readable message, preferring the `error` text over the type tag
    pub fn message(&self) -> Option<String> {
        match (&self.error, &self.error_type) {
            (Some(error), Some(kind)) => Some(format!("{error} ({kind})")),
            (Some(error), None) => Some(error.clone()),
            (None, Some(kind)) => Some(kind.clone()),
            (None, None) => None,
        }
    }
}
