//! Scripted transport for unit tests.

use std::sync::{Arc, Mutex};

use crate::models::ScraperConfig;
use crate::services::Session;
use crate::utils::agents::UserAgentPool;
use crate::utils::http::{FetchRequest, RawResponse, Transport, TransportError};

type Handler = dyn Fn(&FetchRequest) -> Result<RawResponse, TransportError> + Send + Sync;

/// Answers each request with a closure and remembers what was sent.
pub(crate) struct StubTransport {
    handler: Box<Handler>,
    requests: Mutex<Vec<FetchRequest>>,
}

impl StubTransport {
    pub(crate) fn new(
        handler: impl Fn(&FetchRequest) -> Result<RawResponse, TransportError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn requests(&self) -> Vec<FetchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Transport for StubTransport {
    async fn execute(&self, request: FetchRequest) -> Result<RawResponse, TransportError> {
        let response = (self.handler)(&request);
        self.requests.lock().unwrap().push(request);
        response
    }
}

/// Session over `transport` with default endpoints and a single user agent.
pub(crate) fn stub_session(transport: Arc<StubTransport>) -> Session {
    Session::new(
        ScraperConfig::default(),
        transport,
        UserAgentPool::seeded(vec!["test-agent".to_string()], 0),
    )
}

/// 200 response with a JSON body.
pub(crate) fn json_response(body: serde_json::Value) -> Result<RawResponse, TransportError> {
    Ok(RawResponse::new(200, body.to_string()))
}

/// Read the `param=pageN` query value of a comment request.
pub(crate) fn requested_page(request: &FetchRequest) -> Option<u32> {
    request
        .query
        .iter()
        .find(|(name, _)| name == "param")
        .and_then(|(_, value)| value.strip_prefix("page"))
        .and_then(|n| n.parse().ok())
}
