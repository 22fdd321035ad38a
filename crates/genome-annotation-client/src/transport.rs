//! HTTP transport abstraction
//!
//! The client never talks to the network directly. It hands a fully built
//! request to a `Transport` (blocking) or `AsyncTransport` (non-blocking) and
//! interprets whatever status and body come back.

use std::sync::OnceLock;

use async_trait::async_trait;
use genome_annotation_rpc::CONTENT_TYPE_JSON;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;
use url::Url;

/// A single POST to the service endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: Url,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpRequest {
    /// Create a JSON POST request
    pub fn json(url: Url, body: String) -> Self {
        Self {
            url,
            content_type: CONTENT_TYPE_JSON,
            body,
        }
    }
}

/// Status and body of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Option<String>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(body.into()),
        }
    }

    /// A response that carried no body at all
    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }

    /// Body text, treating an empty body the same as a missing one
    pub fn body_text(&self) -> Option<&str> {
        self.body.as_deref().filter(|body| !body.is_empty())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport errors
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Connection error: {0}")]
    Connection(String),
}

/// Blocking transport
pub trait Transport: Send + Sync {
    /// Send a request and wait for the response
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Non-blocking transport
#[async_trait]
pub trait AsyncTransport: Send + Sync {
    /// Send a request, resolving once the response is complete
    async fn send_async(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// reqwest-backed transport used by default
///
/// The blocking client is only built on the first blocking send. As with any
/// `reqwest::blocking` client, blocking sends must not be made from inside an
/// async runtime.
pub struct HttpTransport {
    client: reqwest::Client,
    blocking: OnceLock<reqwest::blocking::Client>,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            blocking: OnceLock::new(),
        }
    }

    fn blocking_client(&self) -> &reqwest::blocking::Client {
        self.blocking.get_or_init(reqwest::blocking::Client::new)
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse an empty body into `None`
fn into_response(status: u16, body: String) -> HttpResponse {
    if body.is_empty() {
        HttpResponse::empty(status)
    } else {
        HttpResponse::new(status, body)
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let response = self
            .blocking_client()
            .post(request.url.clone())
            .header(CONTENT_TYPE, request.content_type)
            .body(request.body.clone())
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;

        Ok(into_response(status, body))
    }
}

#[async_trait]
impl AsyncTransport for HttpTransport {
    async fn send_async(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .post(request.url)
            .header(CONTENT_TYPE, request.content_type)
            .body(request.body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(into_response(status, body))
    }
}
