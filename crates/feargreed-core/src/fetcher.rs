use std::sync::Arc;

use serde::Deserialize;
use time::Date;

use crate::config::{Endpoints, UserAgentPool};
use crate::error::IndexError;
use crate::transport::{HttpClient, HttpRequest, ReqwestHttpClient};

/// Top-level graph-data document shape.
///
/// Both sections are optional on the wire so structural absence surfaces as
/// a distinct error instead of a generic decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphData {
    pub fear_and_greed: Option<CurrentEntry>,
    pub fear_and_greed_historical: Option<HistoricalSection>,
}

/// The `fear_and_greed` object carrying the current index value.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentEntry {
    pub score: f64,
    pub rating: String,
    pub timestamp: String,
}

/// The `fear_and_greed_historical` object wrapping the series array.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoricalSection {
    pub data: Option<Vec<HistoricalEntry>>,
}

/// One point of the live historical series: `x` is a millisecond Unix
/// epoch, `y` the score.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoricalEntry {
    pub x: f64,
    pub y: f64,
    pub rating: String,
}

/// Build the graph-data request URL as a pure local value.
///
/// The `/<YYYY-MM-DD>` suffix tells the live source how far back to return
/// data. It is a request optimization only; range filtering is also applied
/// client-side.
fn graph_data_url(base: &str, start: Option<Date>) -> String {
    match start {
        Some(date) => format!(
            "{base}/{:04}-{:02}-{:02}",
            date.year(),
            u8::from(date.month()),
            date.day()
        ),
        None => base.to_owned(),
    }
}

/// Performs single GETs against the two upstream endpoints.
///
/// Each call picks one user-agent at random from the configured pool and
/// issues one blocking round-trip; there are no retries and no state shared
/// between calls.
#[derive(Clone)]
pub struct Fetcher {
    transport: Arc<dyn HttpClient>,
    endpoints: Endpoints,
    user_agents: UserAgentPool,
}

impl Fetcher {
    /// Production fetcher with the default endpoints and transport.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_transport(transport: Arc<dyn HttpClient>) -> Self {
        Self {
            transport,
            endpoints: Endpoints::default(),
            user_agents: UserAgentPool::default(),
        }
    }

    pub fn with_config(
        transport: Arc<dyn HttpClient>,
        endpoints: Endpoints,
        user_agents: UserAgentPool,
    ) -> Self {
        Self {
            transport,
            endpoints,
            user_agents,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch and decode the graph-data document, optionally suffixing the
    /// URL with a start date.
    ///
    /// # Errors
    ///
    /// [`IndexError::UpstreamStatus`] on a non-2xx response and
    /// [`IndexError::MalformedPayload`] when the body is not the expected
    /// JSON document. The two are deliberately distinct failure modes.
    pub async fn graph_data(&self, start: Option<Date>) -> Result<GraphData, IndexError> {
        let url = graph_data_url(&self.endpoints.graph_data_url, start);
        let body = self.get(&url, "graph data").await?;

        serde_json::from_str(&body)
            .map_err(|e| IndexError::malformed_payload("graph data", e.to_string()))
    }

    /// Fetch the archival CSV dataset as raw text.
    pub async fn archive_csv(&self) -> Result<String, IndexError> {
        let url = self.endpoints.archive_csv_url.clone();
        self.get(&url, "archive").await
    }

    async fn get(&self, url: &str, endpoint: &'static str) -> Result<String, IndexError> {
        let request = HttpRequest::get(url).with_header("user-agent", self.user_agents.pick());
        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            return Err(IndexError::UpstreamStatus {
                endpoint,
                status: response.status,
            });
        }

        Ok(response.body)
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
