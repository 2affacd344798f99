//! HTTP client for the expense tracker API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use super::error::{ClientError, ClientResult};
use super::interceptor::{DefaultInterceptor, Interceptor};
use crate::api::handlers::auth_handler::{LoginRequest, RegisterRequest};
use crate::api::handlers::profile_handler::UpdateProfileRequest;
use crate::config::DEFAULT_CLIENT_TIMEOUT_SECONDS;
use crate::services::TokenResponse;
use crate::types::{UserEnvelope, UserResult};

/// An outgoing request as seen by interceptors
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

impl RequestConfig {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> ClientResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// A successful (2xx) response, body fully read
#[derive(Debug, Clone)]
pub struct ClientResponse {
    pub method: Method,
    pub url: Url,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ClientResponse {
    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// API client.
///
/// Paths passed to the request methods are appended to the base URL's path,
/// so a base of `http://host/api` sends `/profile` to `http://host/api/profile`.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl ApiClient {
    /// Client with the [`DefaultInterceptor`] installed.
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_CLIENT_TIMEOUT_SECONDS))
            .build()?;

        Ok(Self {
            http,
            base_url: directory_url(base_url)?,
            token: None,
            interceptors: vec![Arc::new(DefaultInterceptor::default())],
        })
    }

    /// Replace the interceptor chain.
    pub fn with_interceptors(mut self, interceptors: Vec<Arc<dyn Interceptor>>) -> Self {
        self.interceptors = interceptors;
        self
    }

    /// Bearer token sent with every request.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn url(&self, path: &str) -> ClientResult<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Run a request through the interceptor chain.
    pub async fn send(&self, config: RequestConfig) -> ClientResult<ClientResponse> {
        let config = self
            .interceptors
            .iter()
            .fold(config, |config, interceptor| interceptor.on_request(config));

        match self.execute(config).await {
            Ok(response) => Ok(self
                .interceptors
                .iter()
                .fold(response, |response, interceptor| interceptor.on_response(response))),
            Err(error) => Err(self
                .interceptors
                .iter()
                .fold(error, |error, interceptor| interceptor.on_error(error))),
        }
    }

    async fn execute(&self, config: RequestConfig) -> ClientResult<ClientResponse> {
        let RequestConfig {
            method,
            url,
            headers,
            body,
        } = config;

        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .headers(headers);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Status { status, body });
        }

        Ok(ClientResponse {
            method,
            url,
            status,
            headers,
            body,
        })
    }

    pub async fn get(&self, path: &str) -> ClientResult<ClientResponse> {
        self.send(RequestConfig::new(Method::GET, self.url(path)?))
            .await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<ClientResponse> {
        self.send(RequestConfig::new(Method::POST, self.url(path)?).json(body)?)
            .await
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<ClientResponse> {
        self.send(RequestConfig::new(Method::PUT, self.url(path)?).json(body)?)
            .await
    }

    pub async fn patch<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<ClientResponse> {
        self.send(RequestConfig::new(Method::PATCH, self.url(path)?).json(body)?)
            .await
    }

    // -------------------------------------------------------------------------
    // Typed endpoints
    // -------------------------------------------------------------------------

    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<UserResult> {
        self.post("/auth/register", request).await?.json()
    }

    /// Log in and keep the issued token for subsequent requests.
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<TokenResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let token: TokenResponse = self.post("/auth/login", &request).await?.json()?;
        self.set_token(token.access_token.clone());
        Ok(token)
    }

    pub async fn profile(&self) -> ClientResult<UserEnvelope> {
        self.get("/profile").await?.json()
    }

    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> ClientResult<UserResult> {
        self.put("/profile", request).await?.json()
    }
}

/// Parse `base_url` so that its path ends in `/` and joins append to it.
fn directory_url(base_url: &str) -> ClientResult<Url> {
    let mut url = Url::parse(base_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
