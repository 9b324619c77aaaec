//! HTTP client for the PKWT REST API.
//!
//! Every request carries an abort signal and races a timeout. The bearer token
//! is attached when one is stored; without it the request still goes out and
//! the server decides.

use std::future::Future;

use contracts::shared::{ApiError, MutationResponse};
use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::use_context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::AbortController;

use crate::shared::api_utils::{api_base, join_url};
use crate::shared::config::{use_app_config, AppConfig};
use crate::system::auth::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Put => Request::put(url),
        }
    }
}

/// `Authorization` header value for a stored token, if any.
pub fn auth_header(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {}", t))
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpClient {
    base_url: String,
    timeout_ms: u32,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(api_base(config), config.api.request_timeout_ms)
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    pub async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let controller = new_controller()?;
        self.get_json_with(path, &controller).await
    }

    /// GET bound to a caller-owned controller, so the caller can abort it.
    pub async fn get_json_with<T>(
        &self,
        path: &str,
        controller: &AbortController,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let request = self
            .prepare(HttpMethod::Get, path, controller)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.execute(request, controller).await
    }

    pub async fn send_json<B, T>(&self, method: HttpMethod, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let controller = new_controller()?;
        let request = self
            .prepare(method, path, &controller)
            .json(body)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?;
        self.execute(request, &controller).await
    }

    /// PUT/POST against a `{ok, data?, message?}` endpoint; `ok: false` is an error.
    pub async fn send_mutation<B, T>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let envelope: MutationResponse<T> = self.send_json(method, path, body).await?;
        envelope.into_result()
    }

    fn prepare(&self, method: HttpMethod, path: &str, controller: &AbortController) -> RequestBuilder {
        let url = self.url(path);
        log::debug!("{:?} {}", method, url);
        let signal = controller.signal();
        let mut builder = method
            .builder(&url)
            .header("Accept", "application/json")
            .abort_signal(Some(&signal));
        if let Some(value) = auth_header(storage::get_access_token().as_deref()) {
            builder = builder.header("Authorization", &value);
        }
        builder
    }

    /// Sends `request` and decodes the body. The timeout covers the whole
    /// exchange, body included; on expiry the request is aborted.
    async fn execute<T>(&self, request: Request, controller: &AbortController) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let exchange = exchange(request, controller);
        if self.timeout_ms == 0 {
            return exchange.await;
        }
        match with_deadline(exchange, TimeoutFuture::new(self.timeout_ms)).await {
            Some(result) => result,
            None => {
                controller.abort();
                log::warn!("Request timed out after {} ms", self.timeout_ms);
                Err(ApiError::Timeout(self.timeout_ms))
            }
        }
    }
}

/// Client provided by `App`, or one built from the config in context.
pub fn use_http_client() -> HttpClient {
    use_context::<HttpClient>().unwrap_or_else(|| HttpClient::from_config(&use_app_config()))
}

pub fn new_controller() -> Result<AbortController, ApiError> {
    AbortController::new().map_err(|e| ApiError::Network(format!("{:?}", e)))
}

/// `Some(output)` if `work` finishes before `deadline`, `None` otherwise.
pub async fn with_deadline<F, D>(work: F, deadline: D) -> Option<F::Output>
where
    F: Future,
    D: Future<Output = ()>,
{
    futures::pin_mut!(work, deadline);
    match select(work, deadline).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(((), _)) => None,
    }
}

async fn exchange<T>(request: Request, controller: &AbortController) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let response = request.send().await.map_err(|e| {
        if controller.signal().aborted() {
            ApiError::Aborted
        } else {
            ApiError::Network(e.to_string())
        }
    })?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_response(status, &body));
    }
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    serde_json::from_str::<T>(&text).map_err(|e| ApiError::Decode(e.to_string()))
}
