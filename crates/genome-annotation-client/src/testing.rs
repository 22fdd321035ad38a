//! Test doubles shared by the unit tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use genome_annotation_rpc::{Operation, RpcEnvelope, CONTENT_TYPE_JSON};
use serde_json::json;
use url::Url;

use crate::client::RpcClient;
use crate::config::ClientConfig;
use crate::transport::{AsyncTransport, HttpRequest, HttpResponse, Transport, TransportError};

pub const TEST_ENDPOINT: &str = "http://annotation.test/services/genome_annotation";

/// Answers every request with a canned response and records what was sent
#[derive(Clone)]
pub struct FakeTransport {
    response: Option<HttpResponse>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl FakeTransport {
    pub fn responding(status: u16, body: &str) -> Self {
        Self::with_response(Some(HttpResponse::new(status, body)))
    }

    pub fn empty(status: u16) -> Self {
        Self::with_response(Some(HttpResponse::empty(status)))
    }

    /// A transport whose connection always fails
    pub fn unreachable() -> Self {
        Self::with_response(None)
    }

    fn with_response(response: Option<HttpResponse>) -> Self {
        Self {
            response,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn respond(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.response
            .clone()
            .ok_or_else(|| TransportError::Connection("connection refused".to_string()))
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.respond(request.clone())
    }
}

#[async_trait]
impl AsyncTransport for FakeTransport {
    async fn send_async(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.respond(request)
    }
}

/// Client wired to a fake transport, plus the transport for inspection
pub fn fake_client(transport: FakeTransport) -> (RpcClient, FakeTransport) {
    let config = ClientConfig::new(TEST_ENDPOINT).unwrap();
    let client = RpcClient::with_transports(
        config,
        Arc::new(transport.clone()),
        Arc::new(transport.clone()),
    );
    (client, transport)
}

/// Minimal GenomeAnnotation service: known operations echo their argument,
/// anything else is a 500 with an error payload.
async fn annotation_handler(headers: HeaderMap, body: String) -> (StatusCode, String) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    if content_type != Some(CONTENT_TYPE_JSON) {
        return (StatusCode::UNSUPPORTED_MEDIA_TYPE, String::new());
    }

    let envelope: RpcEnvelope = match serde_json::from_str(&body) {
        Ok(envelope) => envelope,
        Err(e) => {
            let error = json!({
                "error": {"name": "JSONRPCError", "code": -32700, "message": e.to_string()}
            });
            return (StatusCode::INTERNAL_SERVER_ERROR, error.to_string());
        }
    };

    match envelope.method.parse::<Operation>() {
        Ok(_) if envelope.method.contains('.') => {
            let result = json!({"result": [envelope.params.first().cloned()]});
            (StatusCode::OK, result.to_string())
        }
        _ => {
            let error = json!({"error": {
                "name": "JSONRPCError",
                "code": -32601,
                "message": format!("Method not found: {}", envelope.method),
            }});
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}

/// Start the annotation server on a random local port
pub async fn spawn_annotation_server() -> Url {
    let app = Router::new().route("/", post(annotation_handler));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/", addr).parse().unwrap()
}
