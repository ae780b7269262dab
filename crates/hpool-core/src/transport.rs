//! Authenticated transport over an [`HttpClient`].

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::config::ClientConfig;
use crate::http_client::{encode_pairs, HttpClient, HttpMethod, HttpRequest};
use crate::HpoolError;

/// Cookie the pool API reads the access token from.
const AUTH_COOKIE: &str = "auth_token";

/// Owns endpoint, credentials and the HTTP backend. Returns raw bodies;
/// decoding is left to the caller.
pub struct Transport {
    base_url: String,
    auth_cookie: String,
    timeout: Option<Duration>,
    debug: AtomicBool,
    http_client: Arc<dyn HttpClient>,
}

impl Transport {
    pub fn new(config: ClientConfig, http_client: Arc<dyn HttpClient>) -> Self {
        let ClientConfig {
            base_url,
            access_token,
            timeout,
            debug,
        } = config;

        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            auth_cookie: format!("{AUTH_COOKIE}={access_token}"),
            timeout: Some(timeout),
            debug: AtomicBool::new(debug),
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-request timeout, or `None` when the HTTP backend's own applies.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Stops setting a per-request timeout, leaving the backend's in force.
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    pub fn set_debug(&self, enable: bool) {
        self.debug.store(enable, Ordering::Relaxed);
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    /// Sends one request to `path` (relative to the base url) and returns the
    /// response body. GET params go to the query string, POST params to a
    /// form-encoded body. `signed` attaches the access token.
    pub async fn call(
        &self,
        method: HttpMethod,
        path: &str,
        params: BTreeMap<String, String>,
        signed: bool,
    ) -> Result<String, HpoolError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut request = match method {
            HttpMethod::Get => HttpRequest::get(url).with_query(params),
            HttpMethod::Post => HttpRequest::post(url)
                .with_header("content-type", "application/x-www-form-urlencoded")
                .with_body(encode_pairs(&params)),
        };

        if let Some(timeout) = self.timeout {
            request = request.with_timeout(timeout);
        }

        if signed {
            request = request.with_header("cookie", self.auth_cookie.as_str());
        }

        let debug = self.debug_enabled();
        if debug {
            debug!(
                method = %request.method,
                url = %request.full_url(),
                body = request.body.as_deref().unwrap_or(""),
                signed,
                "hpool request"
            );
        }

        let response = self.http_client.execute(request).await?;

        if debug {
            debug!(status = response.status, body = %response.body, "hpool response");
        }

        if !response.is_success() {
            return Err(HpoolError::HttpStatus {
                status: response.status,
                body: response.body,
            });
        }

        Ok(response.body)
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("debug", &self.debug_enabled())
            .finish_non_exhaustive()
    }
}
