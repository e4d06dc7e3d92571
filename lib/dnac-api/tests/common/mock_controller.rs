#![allow(dead_code, missing_docs, clippy::expect_used)]
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use dnac_core::DnacClient;
use http::uri::Scheme;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// A request received by the mock controller.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body should be JSON")
    }
}

#[derive(Debug, Clone)]
struct CannedResponse {
    status: StatusCode,
    content_type: &'static str,
    body: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
struct MockState {
    responses: Arc<Mutex<HashMap<(Method, String), CannedResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// In-process stand-in for a controller.
///
/// Answers every registered `(method, path)` with its canned response,
/// anything else with `404`, and records what it received.
#[derive(Debug, derive_more::Deref)]
pub struct MockController {
    #[deref]
    client: DnacClient,
    state: MockState,
    server: JoinHandle<()>,
}

impl MockController {
    pub async fn start() -> anyhow::Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("bind mock controller")?;
        let address = listener.local_addr()?;
        info!(%address, "mock controller listening");

        let state = MockState::default();
        let router = Router::new().fallback(handle).with_state(state.clone());
        let server = tokio::spawn(async move {
            if let Err(error) = axum::serve(listener, router).await {
                tracing::error!(?error, "mock controller stopped");
            }
        });

        let client = DnacClient::builder()
            .with_scheme(Scheme::HTTP)
            .with_host(address.ip().to_string())
            .with_port(address.port())
            .build()?;

        Ok(Self {
            client,
            state,
            server,
        })
    }

    /// The client bound to this controller.
    pub fn client(&self) -> &DnacClient {
        &self.client
    }

    pub fn respond_json(
        &self,
        method: Method,
        path: &str,
        status: StatusCode,
        body: &serde_json::Value,
    ) {
        self.respond(method, path, status, "application/json", body.to_string().into_bytes());
    }

    pub fn respond(
        &self,
        method: Method,
        path: &str,
        status: StatusCode,
        content_type: &'static str,
        body: Vec<u8>,
    ) {
        let canned = CannedResponse {
            status,
            content_type,
            body,
        };
        self.state
            .responses
            .lock()
            .expect("not poisoned")
            .insert((method, path.to_string()), canned);
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("not poisoned").clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("the controller should have received a request")
    }
}

impl Drop for MockController {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn handle(State(state): State<MockState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .map(|bytes| bytes.to_vec())
        .unwrap_or_default();

    let recorded = RecordedRequest {
        method: parts.method.clone(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        headers: parts.headers,
        body,
    };
    debug!(method = %recorded.method, path = %recorded.path, query = ?recorded.query, "mock received");

    let key = (recorded.method.clone(), recorded.path.clone());
    state.requests.lock().expect("not poisoned").push(recorded);

    let canned = state
        .responses
        .lock()
        .expect("not poisoned")
        .get(&key)
        .cloned();
    match canned {
        Some(canned) => (
            canned.status,
            [(header::CONTENT_TYPE, canned.content_type)],
            Body::from(canned.body),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
