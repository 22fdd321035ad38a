//! JSON-RPC 1.1 client implementation

use std::sync::Arc;

use genome_annotation_rpc::{ResultArity, RpcEnvelope, RpcResponseBody};
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::transport::{AsyncTransport, HttpRequest, HttpResponse, HttpTransport, Transport};

/// Handler invoked with the error of a failed non-blocking call
pub type ErrorCallback = Box<dyn FnOnce(ClientError) + Send + 'static>;

/// Client for a JSON-RPC 1.1 service endpoint
///
/// Holds nothing but the endpoint and the transports; every call is an
/// independent request/response exchange.
#[derive(Clone)]
pub struct RpcClient {
    endpoint: Url,
    transport: Arc<dyn Transport>,
    async_transport: Arc<dyn AsyncTransport>,
}

/// How a completed non-blocking exchange is reported
#[derive(Debug)]
enum Completion {
    Success(Value),
    Failure(ClientError),
    /// Failure status with no body: nothing is reported
    Unreported(u16),
}

impl RpcClient {
    /// Create a client for an endpoint URL using the HTTP transport
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self> {
        Ok(Self::with_config(ClientConfig::new(endpoint)?))
    }

    /// Create a client from configuration using the HTTP transport
    pub fn with_config(config: ClientConfig) -> Self {
        let http = Arc::new(HttpTransport::new());
        Self::with_transports(config, http.clone(), http)
    }

    /// Create a client with explicit transports
    pub fn with_transports(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        async_transport: Arc<dyn AsyncTransport>,
    ) -> Self {
        Self {
            endpoint: config.endpoint,
            transport,
            async_transport,
        }
    }

    /// Get the endpoint URL
    pub fn url(&self) -> &Url {
        &self.endpoint
    }

    fn build_request(endpoint: Url, method: &str, params: Vec<Value>) -> Result<HttpRequest> {
        let body = RpcEnvelope::new(method, params).to_json()?;
        Ok(HttpRequest::json(endpoint, body))
    }

    // ========================================================================
    // Blocking Calls
    // ========================================================================

    /// Call a remote method and wait for the result
    ///
    /// Returns the raw value under `result`, which the service sends as a
    /// sequence. A response without a body yields `Ok(None)`. A status of
    /// 500 or above fails with the `error` payload.
    pub fn call(&self, method: &str, params: Vec<Value>) -> Result<Option<Value>> {
        let request = Self::build_request(self.endpoint.clone(), method, params)?;

        debug!("Calling {} at {}", method, self.endpoint);
        let response = self.transport.send(&request)?;
        debug!("{} answered with status {}", method, response.status);

        interpret_blocking(response)
    }

    // ========================================================================
    // Non-blocking Calls
    // ========================================================================

    /// Call a remote method without waiting for the result
    ///
    /// The exchange runs on the current Tokio runtime. On a 2xx response
    /// `on_success` receives the result, unwrapped according to `arity`.
    /// Any other outcome goes to `on_error`; if no error handler was given
    /// the spawned task panics, which surfaces through the returned handle.
    /// A failure status without a body invokes neither callback.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn call_async<S>(
        &self,
        method: &str,
        params: Vec<Value>,
        arity: ResultArity,
        on_success: S,
        on_error: Option<ErrorCallback>,
    ) -> JoinHandle<()>
    where
        S: FnOnce(Value) + Send + 'static,
    {
        let endpoint = self.endpoint.clone();
        let transport = Arc::clone(&self.async_transport);
        let method = method.to_string();

        tokio::spawn(async move {
            debug!("Calling {} at {} (async)", method, endpoint);

            let completion = match Self::build_request(endpoint, &method, params) {
                Ok(request) => match transport.send_async(request).await {
                    Ok(response) => {
                        debug!("{} answered with status {}", method, response.status);
                        interpret_async(response, arity)
                    }
                    Err(e) => Completion::Failure(e.into()),
                },
                Err(e) => Completion::Failure(e),
            };

            match completion {
                Completion::Success(value) => on_success(value),
                Completion::Failure(err) => match on_error {
                    Some(handler) => handler(err),
                    None => panic!("{} failed with no error handler: {}", method, err),
                },
                Completion::Unreported(status) => {
                    warn!("{} failed with status {} and no response body", method, status);
                }
            }
        })
    }
}

fn decode_body(text: &str) -> Result<RpcResponseBody> {
    RpcResponseBody::from_json(text).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

fn interpret_blocking(response: HttpResponse) -> Result<Option<Value>> {
    let Some(text) = response.body_text() else {
        return Ok(None);
    };

    let body = decode_body(text)?;
    if response.status >= 500 {
        return Err(ClientError::RemoteService(body.into_error()));
    }

    Ok(body.result)
}

fn interpret_async(response: HttpResponse, arity: ResultArity) -> Completion {
    if !response.is_success() {
        return match response.body_text() {
            Some(text) => match decode_body(text) {
                Ok(body) => Completion::Failure(ClientError::RemoteService(body.into_error())),
                Err(e) => Completion::Failure(e),
            },
            None => Completion::Unreported(response.status),
        };
    }

    let Some(text) = response.body_text() else {
        return Completion::Failure(ClientError::InvalidResponse(
            "empty response body".to_string(),
        ));
    };

    let result = match decode_body(text) {
        Ok(body) => body.result.unwrap_or(Value::Null),
        Err(e) => return Completion::Failure(e),
    };

    match arity.unwrap(result) {
        Ok(value) => Completion::Success(value),
        Err(e) => Completion::Failure(ClientError::InvalidResponse(e.to_string())),
    }
}
