use crate::cert::SearchResults;
use crate::censys::auth::Credentials;
use crate::censys::models::{Account, ApiErrorBody, SearchRequest, SearchResponse};
use crate::utils::errors::{CertIndexError, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

pub struct CensysClient {
    client: Client,
    api_url: String,
    credentials: Credentials,
}

impl CensysClient {
    pub fn new(api_url: impl Into<String>, credentials: Credentials) -> Result<Self> {
        let client = super::create_http_client()?;
        let api_url = api_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            api_url,
            credentials,
        })
    }

    /// Search the certificate index, returning the first page of results
    pub async fn search_certificates(&self, query: &str) -> Result<SearchResults> {
        let url = format!("{}/search/certificates", self.api_url);
        tracing::debug!("Making POST request to: {}", url);

        let response = self
            .client
            .post(&url)
            .basic_auth(self.credentials.app_id(), Some(self.credentials.secret()))
            .json(&SearchRequest::new(query))
            .send()
            .await?;

        tracing::debug!("Response status: {}", response.status());
        let response: SearchResponse = self.handle_response(response).await?;
        tracing::debug!(
            "Search matched {} certificates (page {} of {})",
            response.metadata.count,
            response.metadata.page,
            response.metadata.pages
        );

        Ok(SearchResults::from(response))
    }

    /// Account details, including quota usage
    pub async fn account(&self) -> Result<Account> {
        let url = format!("{}/account", self.api_url);
        tracing::debug!("Making GET request to: {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(self.credentials.app_id(), Some(self.credentials.secret()))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle HTTP response from Censys
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<ApiErrorBody>(&error_text)
            .ok()
            .and_then(|body| body.message())
            .unwrap_or(error_text);

        Err(match status.as_u16() {
            401 | 403 => CertIndexError::Auth(format!(
                "Censys rejected the credentials - check {} and {}: {message}",
                super::auth::APP_ID_VAR,
                super::auth::SECRET_VAR
            )),
            429 => CertIndexError::RateLimited(message),
            _ => CertIndexError::Api {
                status: status.as_u16(),
                message,
            },
        })
    }
}
