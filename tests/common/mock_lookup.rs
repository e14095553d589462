//! Mock computation service for exercising the HTTP lookup client.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::Response;
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

pub const QUERY_PATH: &str = "/v2/query";

/// A mock response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    /// Successful response whose primary pod holds `plaintext`.
    pub fn primary(plaintext: &str) -> Self {
        Self::json(&format!(
            r#"{{"queryresult":{{"success":true,"pods":[
                {{"title":"Input interpretation","subpods":[{{"plaintext":"prime"}}]}},
                {{"title":"Result","primary":true,"subpods":[{{"plaintext":"{}"}}]}}
            ]}}}}"#,
            plaintext
        ))
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"error":"mock"}"#.to_string(),
            delay_ms: 0,
        }
    }

    pub fn delayed(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

#[derive(Clone)]
struct MockState {
    response: MockResponse,
    captured: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

pub struct MockLookupServer {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl MockLookupServer {
    pub async fn start(response: MockResponse) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            response,
            captured: Arc::clone(&captured),
        };
        let router = Router::new()
            .route(QUERY_PATH, get(handle_query))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { addr, captured }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}{}", self.addr, QUERY_PATH)
    }

    /// Query parameters of every request received so far.
    pub async fn captured(&self) -> Vec<HashMap<String, String>> {
        self.captured.lock().await.clone()
    }
}

async fn handle_query(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response<Body> {
    state.captured.lock().await.push(params);
    let response = state.response;
    if response.delay_ms > 0 {
        tokio::time::sleep(std::time::Duration::from_millis(response.delay_ms)).await;
    }
    Response::builder()
        .status(response.status)
        .header("content-type", "application/json")
        .body(Body::from(response.body))
        .unwrap()
}
