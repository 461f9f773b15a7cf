//! HTTP API Bindings
//!
//! reqwest-backed client for the Demo backend, behind a trait so the
//! controller and view logic can run against recording mocks in tests.
//! The session cookie travels automatically on same-origin requests;
//! mutating calls additionally carry the CSRF header.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

use crate::error::ApiError;
use crate::models::{Config, Demo, Problem, SessionInfo};

/// Remote operations the controller depends on. Futures are `?Send`
/// because the wasm fetch path is single-threaded; the object itself is
/// shared across component closures and must be `Send + Sync`.
#[async_trait(?Send)]
pub trait DemoApi: Send + Sync {
    async fn list_demos(&self) -> Result<Vec<Demo>, ApiError>;
    async fn create_demo(&self) -> Result<Demo, ApiError>;
    async fn update_demo(&self, demo: &Demo) -> Result<Demo, ApiError>;
    async fn delete_demo(&self, id: &str) -> Result<(), ApiError>;
    /// Diagnostic endpoint that always fails with a problem document.
    async fn trigger_error(&self) -> Result<(), ApiError>;
    async fn load_config(&self) -> Result<Config, ApiError>;
    /// "Who am I" lookup for the current cookie session.
    async fn current_user(&self) -> Result<SessionInfo, ApiError>;
}

pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client against the origin the page was served from.
    pub fn from_window() -> Self {
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default();
        Self::new(origin)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Mutating requests carry the server-issued CSRF cookie as a header.
    fn with_csrf(&self, request: RequestBuilder) -> RequestBuilder {
        match csrf_token() {
            Some(token) => request.header("X-XSRF-TOKEN", token),
            None => request,
        }
    }

    /// Decode non-2xx responses into a problem document. A body that is not
    /// a problem document degrades to a synthetic one from the status line.
    async fn expect_ok(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let problem = match response.json::<Problem>().await {
            Ok(problem) => problem,
            Err(_) => Problem::from_status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("request failed"),
            ),
        };
        Err(ApiError::Problem(problem))
    }
}

#[async_trait(?Send)]
impl DemoApi for HttpApi {
    async fn list_demos(&self) -> Result<Vec<Demo>, ApiError> {
        let response = self.client.get(self.url("/api/demo")).send().await?;
        Ok(Self::expect_ok(response).await?.json().await?)
    }

    async fn create_demo(&self) -> Result<Demo, ApiError> {
        let request = self
            .client
            .post(self.url("/api/demo"))
            .json(&serde_json::json!({}));
        let response = self.with_csrf(request).send().await?;
        Ok(Self::expect_ok(response).await?.json().await?)
    }

    async fn update_demo(&self, demo: &Demo) -> Result<Demo, ApiError> {
        let request = self.client.put(self.url("/api/demo")).json(demo);
        let response = self.with_csrf(request).send().await?;
        Ok(Self::expect_ok(response).await?.json().await?)
    }

    async fn delete_demo(&self, id: &str) -> Result<(), ApiError> {
        let request = self.client.delete(self.url(&format!("/api/demo/{id}")));
        let response = self.with_csrf(request).send().await?;
        Self::expect_ok(response).await?;
        Ok(())
    }

    async fn trigger_error(&self) -> Result<(), ApiError> {
        let response = self.client.get(self.url("/api/demo/error")).send().await?;
        Self::expect_ok(response).await?;
        Ok(())
    }

    async fn load_config(&self) -> Result<Config, ApiError> {
        let response = self.client.get(self.url("/public/config")).send().await?;
        Ok(Self::expect_ok(response).await?.json().await?)
    }

    async fn current_user(&self) -> Result<SessionInfo, ApiError> {
        let response = self.client.get(self.url("/api/auth/user")).send().await?;
        Ok(Self::expect_ok(response).await?.json().await?)
    }
}

/// Value of the XSRF-TOKEN cookie, if the server has issued one.
#[cfg(target_arch = "wasm32")]
fn csrf_token() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let cookies = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == "XSRF-TOKEN").then(|| value.to_string())
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn csrf_token() -> Option<String> {
    None
}
