//! HTTP transport to the summarization backend.
//!
//! One POST per submission; no retry. Uses reqwest for the exchange.

use crate::config::BackendConfig;
use crate::summary::SummaryResult;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// User-Agent string identifying this client
const USER_AGENT: &str = concat!("vidsum/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(reqwest::Error),
    #[error("backend request timed out")]
    Timeout,
    #[error("backend returned {status}: {}", detail.as_deref().unwrap_or("unknown server error"))]
    Status { status: u16, detail: Option<String> },
    #[error("malformed response body: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Request(err)
        }
    }
}

/// Request body for the backend's `/chat` endpoint
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    prompt: &'a str,
}

/// Success body: the generated summary text
#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
}

/// Failure body: optional server-supplied diagnostic
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Anything that can turn a video URL into a [`SummaryResult`].
///
/// The submission state machine depends on this seam so transport can be
/// mocked in tests.
pub trait Summarize {
    fn summarize(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<SummaryResult, ClientError>> + Send;
}

/// Client for the summarization backend.
pub struct SummarizeClient {
    http: Client,
    base_url: String,
}

impl SummarizeClient {
    /// Build a client from backend configuration
    pub fn new(config: &BackendConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl Summarize for SummarizeClient {
    /// Submit a video URL and await the generated summary.
    ///
    /// Single attempt: network failures, non-2xx statuses, and bodies
    /// missing the `response` field all surface as a [`ClientError`].
    async fn summarize(&self, url: &str) -> Result<SummaryResult, ClientError> {
        log::debug!("sending video URL to backend: {}", url);

        let response = self
            .http
            .post(format!("{}/chat", self.base_url))
            .json(&ChatRequest { prompt: url })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            return Err(ClientError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;

        Ok(SummaryResult::new(body.response, url.to_string()))
    }
}
