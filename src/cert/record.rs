use crate::censys::models::{
    SearchMetadata, SearchResponse, FINGERPRINT_SHA256_FIELD, SUBJECT_DN_FIELD,
    VALIDITY_END_FIELD, VALIDITY_START_FIELD,
};
use crate::utils::errors::{CertIndexError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One certificate from the search index, as written to CSV
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub subject_dn: String,
    pub fingerprint_sha256: String,
    pub validity_start: String,
    pub validity_end: String,
}

impl CertificateRecord {
    /// Map a flattened search result onto the output fields, values untouched
    pub fn from_result(result: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            subject_dn: field(result, SUBJECT_DN_FIELD)?,
            fingerprint_sha256: field(result, FINGERPRINT_SHA256_FIELD)?,
            validity_start: field(result, VALIDITY_START_FIELD)?,
            validity_end: field(result, VALIDITY_END_FIELD)?,
        })
    }
}

fn field(result: &Map<String, Value>, name: &'static str) -> Result<String> {
    match result.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Null) | None => Err(CertIndexError::MissingField(name)),
        Some(other) => Ok(other.to_string()),
    }
}

/// Single pass over the results of one search response, in response order
pub struct SearchResults {
    results: std::vec::IntoIter<Map<String, Value>>,
    metadata: SearchMetadata,
}

impl SearchResults {
    pub fn metadata(&self) -> &SearchMetadata {
        &self.metadata
    }
}

impl From<SearchResponse> for SearchResults {
    fn from(response: SearchResponse) -> Self {
        Self {
            results: response.results.into_iter(),
            metadata: response.metadata,
        }
    }
}

impl Iterator for SearchResults {
    type Item = Result<CertificateRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.results
            .next()
            .map(|result| CertificateRecord::from_result(&result))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.results.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_record_from_result() {
        let record = CertificateRecord::from_result(&result(json!({
            "parsed.subject_dn": "C=US, O=Censys, CN=censys.io",
            "parsed.fingerprint_sha256": "9D3B51A6B80DAF76E074730F19DC01E643CA0C3127D8F48BE64CF3302F6622CC",
            "parsed.validity.start": "2019-03-21T00:00:00Z",
            "parsed.validity.end": "2021-03-25T12:00:00Z"
        })))
        .unwrap();

        assert_eq!(record.subject_dn, "C=US, O=Censys, CN=censys.io");
        // Fingerprint passes through exactly, case included
        assert_eq!(
            record.fingerprint_sha256,
            "9D3B51A6B80DAF76E074730F19DC01E643CA0C3127D8F48BE64CF3302F6622CC"
        );
        assert_eq!(record.validity_start, "2019-03-21T00:00:00Z");
        assert_eq!(record.validity_end, "2021-03-25T12:00:00Z");
    }

    #[test]
    fn test_record_missing_field() {
        let err = CertificateRecord::from_result(&result(json!({
            "parsed.subject_dn": "CN=censys.io",
            "parsed.fingerprint_sha256": "ab",
            "parsed.validity.start": "2019-03-21T00:00:00Z"
        })))
        .unwrap_err();

        assert!(matches!(
            err,
            CertIndexError::MissingField("parsed.validity.end")
        ));
    }

    #[test]
    fn test_results_keep_response_order() {
        let response: SearchResponse = serde_json::from_value(json!({
            "status": "ok",
            "results": [
                {"parsed.subject_dn": "CN=b", "parsed.fingerprint_sha256": "02",
                 "parsed.validity.start": "s", "parsed.validity.end": "e"},
                {"parsed.subject_dn": "CN=a", "parsed.fingerprint_sha256": "01",
                 "parsed.validity.start": "s", "parsed.validity.end": "e"}
            ],
            "metadata": {"count": 2, "page": 1, "pages": 1}
        }))
        .unwrap();

        let results = SearchResults::from(response);
        assert_eq!(results.metadata().count, 2);
        assert_eq!(results.size_hint(), (2, Some(2)));

        let subjects: Vec<String> = results.map(|r| r.unwrap().subject_dn).collect();
        assert_eq!(subjects, vec!["CN=b", "CN=a"]);
    }
}
