use std::fmt;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult, ApiSuccess};
use crate::store::{default_store, TokenStore};

/// `Authorization` value for `token`. An empty token still yields the
/// `Bearer ` prefix.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Per-call overrides. Headers given here win over the defaults.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post(body: serde_json::Value) -> Self {
        Self::new(Method::POST).with_body(body)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    tokens: Arc<dyn TokenStore>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url())
            .finish_non_exhaustive()
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ApiConfig::default(), default_store())
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            tokens,
        }
    }

    pub fn api_base(&self) -> &str {
        self.config.base_url()
    }

    /// Stored token, or the empty string when none is stored.
    pub fn token(&self) -> String {
        self.tokens.get().unwrap_or_default()
    }

    pub fn store_token(&self, token: &str) {
        self.tokens.set(token);
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.get().is_some_and(|t| !t.is_empty())
    }

    /// Forgets the stored token. Called on every 401.
    pub fn handle_auth_error(&self) {
        self.tokens.remove();
    }

    /// The `Authorization` header for the current token.
    pub fn api_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&bearer(&self.token())).map_err(ApiError::network)?;
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    fn request_headers(&self, overrides: HeaderMap) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(self.api_headers()?);
        for (name, value) in overrides.iter() {
            headers.insert(name.clone(), value.clone());
        }
        Ok(headers)
    }

    /// Performs one request against `base + endpoint` and classifies the
    /// outcome. Errors are returned, never raised; a 401 also clears the
    /// stored token.
    pub async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.api_base(), endpoint);
        let method = options.method.clone();
        tracing::debug!(%method, %url, "api request");

        let headers = self.request_headers(options.headers)?;
        let mut request = self.http.request(method.clone(), &url).headers(headers);
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, %url, "request failed: {e}");
            ApiError::network(e)
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(%method, %url, "unauthorized, clearing stored token");
            self.handle_auth_error();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            tracing::debug!(%method, %url, status = status.as_u16(), "request rejected");
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let data = response.json::<T>().await.map_err(|e| {
            tracing::warn!(%method, %url, "unreadable response body: {e}");
            ApiError::network(e)
        })?;

        Ok(ApiSuccess {
            data,
            status: status.as_u16(),
        })
    }
}
