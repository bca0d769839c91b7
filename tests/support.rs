use std::collections::VecDeque;
use std::convert::Infallible;
use std::sync::{Arc, Mutex};
use serde_json::Value;
use warp::http::{HeaderMap, Method, StatusCode};
use warp::hyper::body::Bytes;
use warp::path::FullPath;
use warp::Filter;
use vertexai_llm::{GenerationClient, GenerationConfig, VertexProvider};

pub const TOKEN: &str = "test-token";
pub const PROJECT: &str = "test-project";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

struct StubState {
    requests: Mutex<Vec<RecordedRequest>>,
    replies: Mutex<VecDeque<(u16, String)>>,
}

/// Local Vertex stand-in. Every request is recorded and answered with the
/// next queued reply; the last one repeats once the queue runs dry.
pub struct StubServer {
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubServer {
    pub async fn start(responses: Vec<(u16, String)>) -> Self {
        let state = Arc::new(StubState {
            requests: Mutex::new(Vec::new()),
            replies: Mutex::new(responses.into()),
        });

        let state_filter = {
            let state = Arc::clone(&state);
            warp::any().map(move || Arc::clone(&state))
        };

        let route = warp::method()
            .and(warp::path::full())
            .and(warp::header::headers_cloned())
            .and(warp::body::bytes())
            .and(state_filter)
            .and_then(record_and_reply);

        let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        Self {
            base_url: format!("http://{addr}/v1"),
            state,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn provider(&self) -> VertexProvider {
        VertexProvider::new(TOKEN.to_string(), PROJECT.to_string(), "us-central1".to_string())
            .with_base_url(self.base_url.clone())
    }

    pub fn client(&self, model: &str) -> GenerationClient {
        GenerationClient::new(
            GenerationConfig::default().with_model(model).with_project_id(PROJECT),
            Arc::new(self.provider()),
        )
    }
}

pub fn gemini_reply(text: &str) -> (u16, String) {
    let body = serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] }
        }]
    });
    (200, body.to_string())
}

pub fn bison_reply(text: &str) -> (u16, String) {
    let body = serde_json::json!({ "predictions": [{ "content": text }] });
    (200, body.to_string())
}

async fn record_and_reply(
    method: Method,
    path: FullPath,
    headers: HeaderMap,
    body: Bytes,
    state: Arc<StubState>,
) -> Result<impl warp::Reply, Infallible> {
    let headers = headers
        .iter()
        .map(|(key, value)| (key.as_str().to_string(), value.to_str().unwrap_or_default().to_string()))
        .collect();

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: path.as_str().to_string(),
        headers,
        body: String::from_utf8_lossy(&body).to_string(),
    });

    let (status, reply) = {
        let mut replies = state.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.pop_front().unwrap()
        } else {
            replies.front().cloned().unwrap_or((200, "{}".to_string()))
        }
    };

    Ok(warp::reply::with_status(
        warp::reply::with_header(reply, "content-type", "application/json"),
        StatusCode::from_u16(status).unwrap(),
    ))
}
