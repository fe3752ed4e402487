//! NetBox API client transport
//!
//! Holds connection configuration (base URL, token, timeout, retry policy)
//! and performs the HTTP calls. Resource operations live on the service
//! types ([`crate::dcim::DcimService`], [`crate::extras::ExtrasService`]),
//! which borrow a client; the client exclusively owns the transport and
//! credentials.

use crate::error::NetBoxError;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_RETRIES: u32 = 3;
const DEFAULT_RETRY_WAIT: Duration = Duration::from_secs(5);

/// Fixed retry policy: a request is re-sent after a network error or a
/// 5xx response, waiting `wait` between attempts, at most `retries` times.
/// Client errors (4xx) are never retried.
#[derive(Debug, Clone, Copy)]
struct RetryPolicy {
    retries: u32,
    wait: Duration,
}

/// NetBox API client
#[derive(Debug, Clone)]
pub struct NetBoxClient {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

/// Builder for [`NetBoxClient`]
///
/// Options are applied as mutators over a default configuration:
/// timeout 30s, 3 retries with a 5s wait.
#[derive(Debug)]
pub struct NetBoxClientBuilder {
    base_url: String,
    token: String,
    timeout: Duration,
    retry: RetryPolicy,
}

impl NetBoxClientBuilder {
    /// Set the per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry count and the fixed wait between attempts
    #[must_use]
    pub fn retry(mut self, retries: u32, wait: Duration) -> Self {
        self.retry = RetryPolicy { retries, wait };
        self
    }

    /// Build the client
    ///
    /// # Errors
    /// Returns [`NetBoxError::Config`] if the base URL or token is empty,
    /// or if the token cannot be used as a header value.
    pub fn build(self) -> Result<NetBoxClient, NetBoxError> {
        if self.base_url.is_empty() {
            return Err(NetBoxError::Config("baseURL cannot be empty".to_string()));
        }
        if self.token.is_empty() {
            return Err(NetBoxError::Config("token cannot be empty".to_string()));
        }

        let mut token = HeaderValue::from_str(&format!("Token {}", self.token))
            .map_err(|e| NetBoxError::Config(format!("invalid token: {e}")))?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, token);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .build()?;

        Ok(NetBoxClient {
            http,
            base_url: normalize_base_url(&self.base_url),
            retry: self.retry,
        })
    }
}

/// Normalize a base URL so that it always ends in the `/api` root segment,
/// with no trailing slash.
fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with("/api") {
        trimmed.to_string()
    } else {
        format!("{trimmed}/api")
    }
}

impl NetBoxClient {
    /// Create a new NetBox client with the default configuration
    ///
    /// # Arguments
    /// * `base_url` - NetBox base URL (e.g., "http://netbox:8080")
    /// * `token` - API token for authentication
    ///
    /// # Errors
    /// Returns [`NetBoxError::Config`] if `base_url` or `token` is empty.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, NetBoxError> {
        Self::builder(base_url, token).build()
    }

    /// Start building a client with custom timeout or retry settings
    pub fn builder(base_url: impl Into<String>, token: impl Into<String>) -> NetBoxClientBuilder {
        NetBoxClientBuilder {
            base_url: base_url.into(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy {
                retries: DEFAULT_RETRIES,
                wait: DEFAULT_RETRY_WAIT,
            },
        }
    }

    /// Get the normalized base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// DCIM operations (sites, regions, locations, site groups)
    #[must_use]
    pub fn dcim(&self) -> crate::dcim::DcimService<'_> {
        crate::dcim::DcimService::new(self)
    }

    /// Extras operations (tags)
    #[must_use]
    pub fn extras(&self) -> crate::extras::ExtrasService<'_> {
        crate::extras::ExtrasService::new(self)
    }

    /// Build a canonical request URL from path segments
    ///
    /// Joins the base URL with the given segments and applies the NetBox
    /// trailing-slash convention: `build_path(&["dcim", "sites", "1"])`
    /// yields `{base}/dcim/sites/1/`.
    #[must_use]
    pub fn build_path(&self, segments: &[&str]) -> String {
        let mut path = self.base_url.clone();
        for segment in segments {
            path.push('/');
            path.push_str(segment);
        }
        path.push('/');
        path
    }

    /// Validate the API token by making a lightweight authenticated request
    /// to the NetBox status endpoint.
    ///
    /// # Errors
    /// * [`NetBoxError::Authentication`] - the token was rejected (401/403)
    /// * [`NetBoxError::UnexpectedStatus`] - NetBox answered with another
    ///   non-success status
    /// * [`NetBoxError::Transport`] - NetBox is unreachable
    pub async fn validate_token(&self) -> Result<(), NetBoxError> {
        let url = self.build_path(&["status"]);
        debug!("Validating NetBox token and connectivity");

        let response = self.send::<()>(Method::GET, &url, None).await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            return Err(NetBoxError::Authentication(format!(
                "invalid token: {status} - {body}"
            )));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NetBoxError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Token validated successfully");
        Ok(())
    }

    /// Issue a request, retrying on network errors and 5xx responses
    ///
    /// The request is rebuilt from its parts on every attempt. Status
    /// codes below 500 are returned as-is for the caller to map; retries
    /// are exhausted after `retries` re-sends.
    pub(crate) async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, NetBoxError> {
        let mut attempt: u32 = 0;
        loop {
            debug!("{} {}", method, url);

            let mut request = self.http.request(method.clone(), url);
            if let Some(b) = body {
                request = request.json(b);
            }

            match request.send().await {
                Ok(response) if response.status().is_server_error() => {
                    if attempt >= self.retry.retries {
                        return Ok(response);
                    }
                    warn!(
                        "{} {} returned {}, retrying in {:?}",
                        method,
                        url,
                        response.status(),
                        self.retry.wait
                    );
                }
                Ok(response) => return Ok(response),
                Err(e) => {
                    if attempt >= self.retry.retries {
                        return Err(NetBoxError::Transport(e));
                    }
                    warn!("{} {} failed: {}, retrying in {:?}", method, url, e, self.retry.wait);
                }
            }

            attempt += 1;
            tokio::time::sleep(self.retry.wait).await;
        }
    }
}
