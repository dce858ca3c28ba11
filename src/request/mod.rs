//! Request execution
//!
//! Single-shot, user-initiated HTTP calls. A failed call is never retried;
//! re-running simply repeats the whole pipeline.

pub mod render;
pub mod template;

pub use render::{Fragment, Media};
pub use template::{qualify_url, BuiltUrl, FieldValues, RequestTemplate};

use crate::catalog::EndpointId;
use crate::config::Config;
use crate::error::RequestError;
use crate::state::AppState;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// A successful execution, ready for display
#[derive(Debug, Clone)]
pub struct Execution {
    pub status: u16,
    pub status_text: String,
    pub elapsed: Duration,
    pub content_type: String,
    /// Response headers, keys lower-cased, sorted by key
    pub headers: Vec<(String, String)>,
    pub fragment: Fragment,
}

#[derive(Debug, Clone)]
pub struct Executor {
    client: reqwest::Client,
    origin: String,
    user_agent: String,
}

impl Executor {
    pub fn new(origin: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            origin: origin.into(),
            user_agent: user_agent.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.origin().unwrap_or_default(), config.user_agent())
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Issue one request and render its body.
    ///
    /// `url` may be catalog-relative; it is qualified with the origin first.
    /// No body is ever attached, whatever the declared method.
    pub async fn execute(&self, method: &str, url: &str) -> Result<Execution, RequestError> {
        let full_url = qualify_url(&self.origin, url);

        let request = self
            .client
            .request(parse_method(method), &full_url)
            .header(ACCEPT, "*/*")
            .header(USER_AGENT, &self.user_agent);

        let start = Instant::now();
        let response = request
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        let elapsed = start.elapsed();

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or("Unknown").to_string();

        if !status.is_success() {
            return Err(RequestError::HttpStatus {
                status: status.as_u16(),
                status_text,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let mut headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(key, value)| {
                (
                    key.as_str().to_lowercase(),
                    value.to_str().unwrap_or("").to_string(),
                )
            })
            .collect();
        headers.sort();

        let body = response
            .bytes()
            .await
            .map_err(|e| RequestError::Body(e.to_string()))?;

        let fragment = render::render(&content_type, &body)?;

        Ok(Execution {
            status: status.as_u16(),
            status_text,
            elapsed,
            content_type,
            headers,
            fragment,
        })
    }
}

fn parse_method(method: &str) -> reqwest::Method {
    match method.to_uppercase().as_str() {
        "GET" => reqwest::Method::GET,
        "POST" => reqwest::Method::POST,
        "PUT" => reqwest::Method::PUT,
        "PATCH" => reqwest::Method::PATCH,
        "DELETE" => reqwest::Method::DELETE,
        "HEAD" => reqwest::Method::HEAD,
        "OPTIONS" => reqwest::Method::OPTIONS,
        _ => reqwest::Method::GET, // Default to GET for unknown methods
    }
}

/// Executes a request for one panel in the background.
///
/// The caller has already moved the panel to `Loading` and handed out
/// `generation`; a completion whose generation no longer matches is dropped.
pub fn execute_request_background(
    state: Arc<RwLock<AppState>>,
    executor: Executor,
    id: EndpointId,
    generation: u64,
    method: String,
    url: String,
) {
    tokio::spawn(async move {
        info!("executing {method} {url} for endpoint {id}");
        let result = executor.execute(&method, &url).await;

        match &result {
            Ok(execution) => debug!(
                "endpoint {id} answered {} in {}ms",
                execution.status,
                execution.elapsed.as_millis()
            ),
            Err(e) => warn!("endpoint {id} failed: {e}"),
        }

        if let Ok(mut s) = state.write() {
            if !s.finish_execution(id, generation, result) {
                debug!("discarded stale response for endpoint {id}");
            }
        }
    });
}
