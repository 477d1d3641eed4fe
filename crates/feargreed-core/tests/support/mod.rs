//! Shared test transport serving golden fixtures offline.

#![allow(dead_code)]

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use feargreed_core::{FearGreedClient, Fetcher, HttpClient, HttpError, HttpRequest, HttpResponse};

pub const GRAPH_FIXTURE: &str = include_str!("../fixtures/graphdata-golden.json");
pub const ARCHIVE_FIXTURE: &str = include_str!("../fixtures/archive-golden.csv");

/// Routes graph-data requests and archive requests to canned bodies while
/// recording every requested URL.
pub struct FixtureTransport {
    graph_status: u16,
    graph_body: String,
    archive_status: u16,
    archive_body: String,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FixtureTransport {
    pub fn new(graph_body: impl Into<String>, archive_body: impl Into<String>) -> Self {
        Self {
            graph_status: 200,
            graph_body: graph_body.into(),
            archive_status: 200,
            archive_body: archive_body.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn golden() -> Self {
        Self::new(GRAPH_FIXTURE, ARCHIVE_FIXTURE)
    }

    pub fn with_graph_status(mut self, status: u16) -> Self {
        self.graph_status = status;
        self
    }

    pub fn with_archive_status(mut self, status: u16) -> Self {
        self.archive_status = status;
        self
    }

    pub fn recorded(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("request log lock").clone()
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.recorded().into_iter().map(|r| r.url).collect()
    }
}

impl HttpClient for FixtureTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request log lock")
            .push(request.clone());

        let (status, body) = if request.url.ends_with(".csv") {
            (self.archive_status, self.archive_body.clone())
        } else {
            (self.graph_status, self.graph_body.clone())
        };

        Box::pin(async move { Ok(HttpResponse { status, body }) })
    }
}

pub fn client_with(transport: Arc<FixtureTransport>) -> FearGreedClient {
    FearGreedClient::with_fetcher(Fetcher::with_transport(transport))
}
