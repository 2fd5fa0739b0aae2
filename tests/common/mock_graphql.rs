//! Mock GraphQL server for client tests.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A canned response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn error(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::json(r#"{"data":{"country":null}}"#)
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

pub struct MockGraphql {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockGraphql {
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/graphql", post(handle_query))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub async fn enqueue_response(&self, resp: MockResponse) {
        self.state.responses.lock().await.push_back(resp);
    }

    /// JSON bodies of every request received so far.
    pub async fn captured_requests(&self) -> Vec<serde_json::Value> {
        self.state.requests.lock().await.clone()
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/graphql", self.addr)
    }
}

impl Drop for MockGraphql {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_query(State(state): State<MockState>, body: String) -> Response {
    let parsed = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    state.requests.lock().await.push(parsed);

    let mock = state
        .responses
        .lock()
        .await
        .pop_front()
        .unwrap_or_default();
    let status = StatusCode::from_u16(mock.status).unwrap();
    (status, [(header::CONTENT_TYPE, "application/json")], mock.body).into_response()
}
