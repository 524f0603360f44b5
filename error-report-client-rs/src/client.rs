//! Submission client
//!
//! Sends the error report as a JSON POST to the server's ingestion endpoint
//! and classifies the result into a [`SubmissionOutcome`]. Exactly one
//! attempt is made per invocation: a hard timeout bounds the request and no
//! retry is performed on timeout or connection failure.

use log::{debug, warn};
use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Classified result of one submission attempt.
///
/// Network-level failures carry no status code; HTTP-level failures carry
/// the status and, for non-200 responses, the raw response body. An HTTP
/// 200 whose body does not parse as JSON is a failure with status 200 and
/// no raw text, kept distinct only in its diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    /// Whether the server accepted the report
    pub success: bool,

    /// HTTP status code, absent if the network call itself failed
    pub status: Option<u16>,

    /// Parsed response body (success only)
    pub body: Option<Value>,

    /// Raw response text or transport-error description (failures only)
    pub raw_text: Option<String>,
}

impl SubmissionOutcome {
    /// HTTP 200 with a JSON body: the report was accepted
    pub fn accepted(body: Value) -> Self {
        Self {
            success: true,
            status: Some(StatusCode::OK.as_u16()),
            body: Some(body),
            raw_text: None,
        }
    }

    /// Any non-200 status: the server rejected the report
    pub fn rejected(status: u16, raw_text: impl Into<String>) -> Self {
        Self {
            success: false,
            status: Some(status),
            body: None,
            raw_text: Some(raw_text.into()),
        }
    }

    /// HTTP 200 whose body failed to parse as JSON
    pub fn decode_failure() -> Self {
        Self {
            success: false,
            status: Some(StatusCode::OK.as_u16()),
            body: None,
            raw_text: None,
        }
    }

    /// The HTTP exchange itself failed (refused, timeout, DNS, TLS)
    pub fn transport_failure(description: impl Into<String>) -> Self {
        Self {
            success: false,
            status: None,
            body: None,
            raw_text: Some(description.into()),
        }
    }

    /// Remote-assigned report identifier, if the response carried one
    pub fn report_id(&self) -> Option<&Value> {
        self.body.as_ref().and_then(|body| body.get("id"))
    }

    /// View URL for the stored report, if the response carried one
    pub fn report_url(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|body| body.get("url"))
            .and_then(Value::as_str)
    }

    /// True for the "200 but unparseable body" failure
    pub fn is_decode_failure(&self) -> bool {
        !self.success && self.status == Some(StatusCode::OK.as_u16()) && self.raw_text.is_none()
    }

    /// True if the HTTP exchange never completed
    pub fn is_transport_failure(&self) -> bool {
        self.status.is_none()
    }
}

/// Validate the target endpoint before any network activity
pub fn validate_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| ClientError::configuration(format!("invalid server URL '{}': {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ClientError::configuration(format!(
            "unsupported URL scheme '{}' in '{}'",
            other, raw
        ))),
    }
}

/// HTTP submission client for the error reporting server
pub struct SubmissionClient {
    /// HTTP client with default headers and timeout applied
    http: Client,
}

impl SubmissionClient {
    /// Build a client from the given configuration.
    ///
    /// The identifying `User-Agent` is installed as a default header; the
    /// JSON content type is attached per request by `reqwest`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)
                .map_err(|e| ClientError::configuration(format!("invalid user agent: {}", e)))?,
        );

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                ClientError::configuration(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self { http })
    }

    /// Submit the payload to `url` with a single POST attempt.
    ///
    /// Every failure mode is folded into the returned outcome; this call
    /// never panics and has no side effects beyond the network exchange.
    pub async fn submit(&self, url: &str, payload: &Value) -> SubmissionOutcome {
        debug!("submitting error report to {}", url);

        let response = match self.http.post(url).json(payload).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("submission transport failure: {}", e);
                return SubmissionOutcome::transport_failure(describe_transport_error(&e));
            }
        };

        let status = response.status();
        if status == StatusCode::OK {
            let text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    warn!("failed to read response body: {}", e);
                    return SubmissionOutcome::transport_failure(format!(
                        "failed to read response body: {}",
                        e
                    ));
                }
            };

            match serde_json::from_str::<Value>(&text) {
                Ok(body) => SubmissionOutcome::accepted(body),
                Err(e) => {
                    warn!("server returned 200 with unparseable body: {}", e);
                    SubmissionOutcome::decode_failure()
                }
            }
        } else {
            let raw = response
                .text()
                .await
                .unwrap_or_else(|e| format!("failed to read error response: {}", e));
            SubmissionOutcome::rejected(status.as_u16(), raw)
        }
    }
}

/// Human-readable description of a transport-level failure
fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {}", err)
    } else if err.is_connect() {
        format!("connection error: {}", err)
    } else if err.is_request() {
        format!("invalid request: {}", err)
    } else {
        format!("HTTP client error: {}", err)
    }
}
