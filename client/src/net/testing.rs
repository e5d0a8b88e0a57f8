//! Scripted transport for driving panel flows in unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use super::http::{ApiClient, ApiError, ApiRequest, ApiResponse, Method, Transport};
use crate::state::session::Session;

/// Records every request and answers from a FIFO script. An empty script
/// answers `200 []`.
#[derive(Default)]
pub struct ScriptedTransport {
    requests: Mutex<Vec<ApiRequest>>,
    replies: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
}

impl ScriptedTransport {
    pub fn reply(&self, status: u16, body: serde_json::Value) -> &Self {
        self.push(Ok(ApiResponse { status, body: body.to_string() }))
    }

    pub fn fail(&self, error: ApiError) -> &Self {
        self.push(Err(error))
    }

    fn push(&self, reply: Result<ApiResponse, ApiError>) -> &Self {
        self.replies.lock().expect("replies lock").push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.url == path)
            .count()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ApiError>> {
        self.requests.lock().expect("requests lock").push(request);
        let reply = self
            .replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse { status: 200, body: "[]".to_owned() }));
        async move { reply }.boxed_local()
    }
}

/// Client with a stored token and an empty base URL, plus the transport
/// handle for assertions.
pub fn client_with_token(token: Option<&str>) -> (ApiClient, Arc<ScriptedTransport>) {
    let session = Session::in_memory();
    if let Some(token) = token {
        session.set_token(token);
    }
    let transport = Arc::new(ScriptedTransport::default());
    let client = ApiClient::new("", session, transport.clone());
    (client, transport)
}
