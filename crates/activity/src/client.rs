use serde::Deserialize;

use crate::types::{FetchError, Result};
use dashboard_core::{Credentials, DateRange, UsageRecord};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

const ACTIVITY_PATH: &str = "/v1/dashboard/activity";

#[derive(Debug, Deserialize)]
struct ActivityResponse {
    data: Vec<UsageRecord>,
}

/// Client for the external usage endpoint. Issues exactly one request per
/// call; retries, pagination, and caching are out of scope.
#[derive(Debug, Clone)]
pub struct ActivityClient {
    http: reqwest::Client,
    base_url: String,
}

impl ActivityClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host, e.g. a local stub in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch_activity(
        &self,
        credentials: &Credentials,
        range: &DateRange,
    ) -> Result<Vec<UsageRecord>> {
        let url = format!("{}{}", self.base_url, ACTIVITY_PATH);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("start_date", range.start.as_str()),
                ("end_date", range.end.as_str()),
            ])
            .bearer_auth(&credentials.api_key)
            .header("Openai-Organization", &credentials.organization_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: ActivityResponse = response.json().await?;
        Ok(body.data)
    }
}

impl Default for ActivityClient {
    fn default() -> Self {
        Self::new()
    }
}
