//! The HTTP client shared by every resource module.
//!
//! Each call builds `base_url + path`, asks the injected [`TokenProvider`]
//! for the current token, sends JSON and makes exactly one attempt. Non-2xx
//! responses become [`AdminError::Http`] with the raw body; 2xx bodies go
//! through envelope unwrapping.

use std::sync::Arc;
use std::time::Instant;

use reqwest::header::ACCEPT;
use reqwest::{Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{AdminError, AdminResult};

use super::response::unwrap_envelope;
use super::token::{StaticToken, StorageToken, TokenProvider};

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Client for the evaluation REST API.
///
/// Cloning is cheap: the connection pool and token provider are shared.
///
/// # Example
///
/// ```no_run
/// use evaluation_admin::api::{ApiClient, StaticToken};
///
/// # async fn run() -> evaluation_admin::error::AdminResult<()> {
/// let client = ApiClient::new("http://localhost:8080/api/v1", StaticToken::new("eyJ..."));
/// let periods = client.list_periods().await?;
/// println!("{} periods", periods.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    /// Creates a client for `base_url` using `tokens` for authorization.
    pub fn new(base_url: impl Into<String>, tokens: impl TokenProvider + 'static) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, tokens)
    }

    /// Creates a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        tokens: impl TokenProvider + 'static,
    ) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            tokens: Arc::new(tokens),
        }
    }

    /// Creates a client from configuration.
    ///
    /// Uses [`StorageToken`] when a storage file is configured, otherwise
    /// sends requests without a token.
    pub fn from_config(config: &ClientConfig) -> Self {
        match &config.token_storage {
            Some(path) => Self::new(
                config.base_url.clone(),
                StorageToken::new(path.clone(), config.token_key.clone()),
            ),
            None => Self::new(config.base_url.clone(), StaticToken::none()),
        }
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends one request and checks its status.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> AdminResult<Response> {
        let request_id = Uuid::new_v4();

        let mut builder = self
            .http
            .request(method.clone(), self.url(path))
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .header(ACCEPT, "application/json");

        match self.tokens.token() {
            Ok(Some(token)) => builder = builder.bearer_auth(token),
            Ok(None) => debug!(request_id = %request_id, "No auth token available"),
            Err(e) => {
                warn!(request_id = %request_id, error = %e, "Failed to read auth token");
                return Err(e);
            }
        }

        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        debug!(request_id = %request_id, method = %method, path, "Sending request");
        let started = Instant::now();

        let response = builder.send().await.map_err(|e| {
            warn!(
                request_id = %request_id,
                method = %method,
                path,
                error = %e,
                "Request failed"
            );
            AdminError::from(e)
        })?;

        let status = response.status();
        let elapsed_ms = started.elapsed().as_millis() as u64;

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                request_id = %request_id,
                method = %method,
                path,
                status = status.as_u16(),
                elapsed_ms,
                "Request rejected"
            );
            return Err(AdminError::Http {
                status: status.as_u16(),
                body,
            });
        }

        info!(
            request_id = %request_id,
            method = %method,
            path,
            status = status.as_u16(),
            elapsed_ms,
            "Request completed"
        );
        Ok(response)
    }

    /// Sends a request and decodes the (possibly enveloped) JSON payload.
    async fn fetch<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> AdminResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(method.clone(), path, query, body).await?;
        let text = response.text().await?;
        unwrap_envelope(&text).inspect_err(|e| {
            warn!(method = %method, path, error = %e, "Unusable response body");
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> AdminResult<T> {
        self.fetch::<T, ()>(Method::GET, path, &[], None).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AdminResult<T> {
        self.fetch::<T, ()>(Method::GET, path, query, None).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> AdminResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.fetch(Method::POST, path, &[], Some(body)).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> AdminResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.fetch(Method::PUT, path, &[], Some(body)).await
    }

    /// Deletes a resource; any payload in the response is discarded.
    pub(crate) async fn delete(&self, path: &str) -> AdminResult<()> {
        self.fetch::<serde_json::Value, ()>(Method::DELETE, path, &[], None)
            .await
            .map(|_| ())
    }

    /// Fetches a raw, non-JSON body such as an export file.
    pub(crate) async fn get_bytes(&self, path: &str) -> AdminResult<Vec<u8>> {
        let response = self.send::<()>(Method::GET, path, &[], None).await?;
        Ok(response.bytes().await?.to_vec())
    }
}
