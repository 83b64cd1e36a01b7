//! REST client for the lead backend.
//!
//! Wraps the backend HTTP API (lead listing and creation, filter vocabulary,
//! statistics) using [`reqwest`]. Every call is a fresh request: nothing is
//! cached or retried here.

use reqwest::{RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::errors::{ClientError, ClientResult};
use crate::client::{LeadListQuery, LeadReader, LeadWriter, OptionsReader};
use crate::domain::lead::{Lead, LeadCreate, LeadSummary};

/// Backend address used when the configuration does not provide one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

const LIST_LEADS_FAILED: &str = "Failed to fetch leads";
const GET_LEAD_FAILED: &str = "Failed to fetch lead";
const SUMMARY_FAILED: &str = "Failed to fetch lead summary";
const CREATE_LEAD_FAILED: &str = "Failed to create lead";
const INDUSTRY_OPTIONS_FAILED: &str = "Failed to fetch industry options";
const HEADCOUNT_OPTIONS_FAILED: &str = "Failed to fetch headcount options";

/// HTTP client for a single lead backend.
#[derive(Clone, Debug)]
pub struct HttpLeadClient {
    client: reqwest::Client,
    base_url: String,
}

/// Error payload returned by the backend on rejected requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

impl HttpLeadClient {
    /// Create a client for the backend at `base_url`, e.g. `http://host:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`] connection pool.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a read request and decodes the JSON body, mapping any
    /// non-success status to [`ClientError::Fetch`] with `failure` as message.
    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        failure: &str,
    ) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            log::error!("{failure}: backend answered {status}");
            return Err(ClientError::Fetch(failure.to_string()));
        }
        Ok(response.json().await?)
    }
}

/// Extracts a human readable message from a failed creation response body.
///
/// Accepts `{"detail": "..."}` as well as validation bodies where `detail` is
/// a list of `{"msg": "..."}` objects.
fn creation_error_message(body: &[u8]) -> String {
    let detail = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail);

    match detail {
        Some(Value::String(message)) if !message.trim().is_empty() => message,
        Some(Value::Array(items)) => {
            let messages = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect::<Vec<_>>();
            if messages.is_empty() {
                CREATE_LEAD_FAILED.to_string()
            } else {
                messages.join("; ")
            }
        }
        _ => CREATE_LEAD_FAILED.to_string(),
    }
}

impl LeadReader for HttpLeadClient {
    async fn list_leads(&self, query: &LeadListQuery) -> ClientResult<Vec<Lead>> {
        let pairs = query.to_query_pairs();
        let mut request = self.client.get(self.url("/leads"));
        if !pairs.is_empty() {
            request = request.query(&pairs);
        }
        self.fetch(request, LIST_LEADS_FAILED).await
    }

    async fn get_lead(&self, id: i32) -> ClientResult<Option<Lead>> {
        let response = self
            .client
            .get(self.url(&format!("/leads/{id}")))
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => {
                log::error!("{GET_LEAD_FAILED} {id}: backend answered {status}");
                Err(ClientError::Fetch(GET_LEAD_FAILED.to_string()))
            }
        }
    }

    async fn leads_summary(&self) -> ClientResult<LeadSummary> {
        self.fetch(
            self.client.get(self.url("/leads/stats/summary")),
            SUMMARY_FAILED,
        )
        .await
    }
}

impl LeadWriter for HttpLeadClient {
    async fn create_lead(&self, lead: &LeadCreate) -> ClientResult<Lead> {
        let response = self
            .client
            .post(self.url("/leads"))
            .json(lead)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message = creation_error_message(&body);
            log::error!("{CREATE_LEAD_FAILED}: backend answered {status}: {message}");
            return Err(ClientError::Creation(message));
        }

        Ok(response.json().await?)
    }
}

impl OptionsReader for HttpLeadClient {
    async fn list_industry_options(&self) -> ClientResult<Vec<String>> {
        self.fetch(
            self.client.get(self.url("/industry/options")),
            INDUSTRY_OPTIONS_FAILED,
        )
        .await
    }

    async fn list_headcount_options(&self) -> ClientResult<Vec<String>> {
        self.fetch(
            self.client.get(self.url("/headcount/options")),
            HEADCOUNT_OPTIONS_FAILED,
        )
        .await
    }
}
