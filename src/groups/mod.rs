//! Client for the console's group listing endpoint.

pub mod types;

use std::env;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use types::{Envelope, GroupListParams, GroupPage};

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api";
const LIST_PATH: &str = "/tg/group/list/json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// `err_code` reported for failures that carry no server code of their own.
pub const GENERIC_FAILURE_CODE: i64 = 1;

#[derive(Debug, thiserror::Error)]
pub enum GroupApiError {
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("unauthorized: session missing or expired (set GROUPSCOUT_SESSION_COOKIE)")]
    Unauthorized,

    #[error("access denied")]
    Forbidden,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("API error ({code}): {message}")]
    Api { code: i64, message: String },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl GroupApiError {
    /// Status code to report in a failure envelope.
    pub fn code(&self) -> i64 {
        match self {
            GroupApiError::Api { code, .. } => *code,
            _ => GENERIC_FAILURE_CODE,
        }
    }
}

/// Abstraction over the remote group listing.
/// Implemented by `GroupsClient` for production; mock implementations used in tests.
pub trait GroupSource {
    async fn list(&self, params: &GroupListParams) -> Result<GroupPage, GroupApiError>;
}

#[derive(Clone)]
struct SessionCookie(String);

impl std::fmt::Debug for SessionCookie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// HTTP client for `GET /tg/group/list/json`.
///
/// Configuration via environment variables:
/// - `GROUPSCOUT_API_BASE`: console API root (default `http://127.0.0.1:8000/api`)
/// - `GROUPSCOUT_SESSION_COOKIE`: `Cookie` header value for session auth (optional)
#[derive(Clone, Debug)]
pub struct GroupsClient {
    http: Client,
    list_url: Url,
    session: Option<SessionCookie>,
}

impl GroupsClient {
    pub fn new(
        http: Client,
        base_url: &str,
        session: Option<String>,
    ) -> Result<Self, GroupApiError> {
        let list_url = Url::parse(&format!("{}{LIST_PATH}", base_url.trim_end_matches('/')))?;
        Ok(Self {
            http,
            list_url,
            session: session.map(SessionCookie),
        })
    }

    /// Build a client from the environment. `base_override` wins over `GROUPSCOUT_API_BASE`.
    pub fn from_env(http: Client, base_override: Option<&str>) -> Result<Self, GroupApiError> {
        let base = match base_override {
            Some(base) => base.to_string(),
            None => non_empty_var("GROUPSCOUT_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        };
        let session = non_empty_var("GROUPSCOUT_SESSION_COOKIE");
        if session.is_none() {
            debug!("no session cookie configured; requests are unauthenticated");
        }
        Self::new(http, &base, session)
    }

    fn url_for(&self, params: &GroupListParams) -> Url {
        let mut url = self.list_url.clone();
        let mut pairs = params.query_pairs().peekable();
        if pairs.peek().is_some() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl GroupSource for GroupsClient {
    async fn list(&self, params: &GroupListParams) -> Result<GroupPage, GroupApiError> {
        let url = self.url_for(params);
        let mut request = self
            .http
            .get(url.clone())
            .header("User-Agent", crate::USER_AGENT)
            .timeout(REQUEST_TIMEOUT);
        if let Some(ref session) = self.session {
            request = request.header("Cookie", &session.0);
        }

        let response = request.send().await?;
        let status = response.status();
        match status.as_u16() {
            200..=299 => {}
            401 => return Err(GroupApiError::Unauthorized),
            403 => return Err(GroupApiError::Forbidden),
            404 => return Err(GroupApiError::NotFound(url.path().to_string())),
            code => {
                warn!(status = %status, "group list request failed");
                return Err(GroupApiError::Status(code));
            }
        }

        let text = response.text().await?;
        let envelope: Envelope<Value> = serde_json::from_str(&text)?;
        if envelope.err_code != 0 {
            warn!(code = envelope.err_code, message = %envelope.err_msg, "group list API error");
            return Err(GroupApiError::Api {
                code: envelope.err_code,
                message: envelope.err_msg,
            });
        }

        let page: GroupPage = serde_json::from_value(envelope.payload)?;
        debug!(results = page.data.len(), "group list fetched");
        Ok(page)
    }
}
