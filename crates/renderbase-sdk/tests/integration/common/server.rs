//! In-process mock of the Renderbase API.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use parking_lot::RwLock;
use renderbase_sdk::RenderbaseClient;
use serde_json::Value;
use tokio::net::TcpListener;

/// API key used by every test client.
pub const TEST_API_KEY: &str = "sk_test";

/// Base path the mock server is mounted under.
pub const API_PREFIX: &str = "/api/v1";

/// A request received by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Parses the body as JSON.
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }

    /// Returns a header value by lowercase name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

/// Response the mock server returns for every request.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub content_type: String,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self {
            status: 200,
            body: b"{}".to_vec(),
            content_type: "application/json".to_string(),
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    requests: RwLock<Vec<RecordedRequest>>,
    response: RwLock<MockResponse>,
}

/// Mock API server bound to a random local port.
#[derive(Debug, Clone)]
pub struct MockApiServer {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockApiServer {
    /// Starts the server on `127.0.0.1:0`.
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock server");
        let addr = listener.local_addr().expect("no local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server failed");
        });

        Self { addr, state }
    }

    /// Base URL clients should use.
    pub fn base_url(&self) -> String {
        format!("http://{}{}", self.addr, API_PREFIX)
    }

    /// Absolute URL for a path outside the API prefix.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Builds a client pointing at this server.
    pub fn client(&self) -> RenderbaseClient {
        RenderbaseClient::with_base_url(TEST_API_KEY, self.base_url())
            .expect("failed to build client")
    }

    /// Replies with a JSON body.
    pub fn respond_json(&self, status: u16, body: Value) {
        *self.state.response.write() = MockResponse {
            status,
            body: serde_json::to_vec(&body).expect("serializable body"),
            content_type: "application/json".to_string(),
        };
    }

    /// Replies with raw bytes.
    pub fn respond_raw(&self, status: u16, body: impl Into<Vec<u8>>, content_type: &str) {
        *self.state.response.write() = MockResponse {
            status,
            body: body.into(),
            content_type: content_type.to_string(),
        };
    }

    /// Returns all recorded requests.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.read().clone()
    }

    /// Returns the only recorded request, failing if there is not exactly one.
    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests.into_iter().next().expect("one request")
    }

    /// Clears recorded requests.
    pub fn clear(&self) {
        self.state.requests.write().clear();
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let headers = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();

    state.requests.write().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(String::from),
        headers,
        body: body.to_vec(),
    });

    let response = state.response.read().clone();
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (status, [(header::CONTENT_TYPE, response.content_type)], response.body).into_response()
}
