// HTTP client for GET /api/sysinfo

use std::time::Duration;

use reqwest::Client;
use reqwest::header::CACHE_CONTROL;

use crate::error::FetchError;
use crate::models::SysinfoResponse;
use crate::version;

/// Fetches snapshots from a single metrics endpoint.
#[derive(Debug, Clone)]
pub struct SysinfoClient {
    url: String,
    client: Client,
}

impl SysinfoClient {
    /// `url` is the full endpoint, e.g. `http://127.0.0.1:8015/api/sysinfo`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(version::user_agent())
            .build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// One request. Any non-2xx status is a failure; the body is not inspected.
    pub async fn fetch(&self) -> Result<SysinfoResponse, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        response
            .json::<SysinfoResponse>()
            .await
            .map_err(|source| FetchError::Decode {
                url: self.url.clone(),
                source,
            })
    }
}
