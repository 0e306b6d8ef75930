use reqwest::{header, Client};
use serde::de::DeserializeOwned;

use crate::error::FetcherError;
use crate::types::github::FileEntry;

const USER_AGENT: &str = "repo-folder-fetcher";

pub struct GithubClient {
    client: Client,
}

impl GithubClient {
    /// `accept_invalid_certs` turns off TLS certificate verification for
    /// every request this client makes. With it set, downloaded bytes
    /// carry no transport integrity guarantee.
    pub fn new(accept_invalid_certs: bool) -> Self {
        let client = Client::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    fn build_headers(&self) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        // GitHub rejects requests without a User-Agent
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static(USER_AGENT));
        headers
    }

    /// Single-shot GET; a non-success status is an error, not a retry.
    async fn get(&self, url: &str) -> Result<reqwest::Response, FetcherError> {
        let response = self
            .client
            .get(url)
            .headers(self.build_headers())
            .send()
            .await
            .map_err(|e| FetcherError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetcherError::StatusError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn get_json<T>(&self, url: &str) -> Result<T, FetcherError>
    where
        T: DeserializeOwned,
    {
        let body = self
            .get(url)
            .await?
            .text()
            .await
            .map_err(|e| FetcherError::NetworkError(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| FetcherError::ParseError(e.to_string()))
    }

    /// Fetches one page of a contents-API directory listing.
    pub async fn list_directory(&self, url: &str) -> Result<Vec<FileEntry>, FetcherError> {
        self.get_json(url).await
    }

    /// Fetches the raw bytes behind a `download_url`.
    pub async fn download(&self, url: &str) -> Result<Vec<u8>, FetcherError> {
        let bytes = self
            .get(url)
            .await?
            .bytes()
            .await
            .map_err(|e| FetcherError::NetworkError(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
