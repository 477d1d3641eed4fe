//! # Feargreed Core
//!
//! Retrieval and normalization of CNN's Fear & Greed Index.
//!
//! ## Overview
//!
//! The crate fetches the current index value and assembles its historical
//! series from two heterogeneous sources: the live graph-data JSON endpoint
//! and an archival CSV dataset covering dates before the live endpoint's
//! coverage window. A fixed cutoff instant (2021-02-01T00:00:00Z by
//! default) marks where one source hands over to the other.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`archive`] | Archival CSV parsing and window filtering |
//! | [`client`] | [`FearGreedClient`]: `current` and `historical` operations |
//! | [`config`] | Endpoint URLs, cutoff instant, user-agent pool |
//! | [`domain`] | [`SentimentReading`] and [`UtcDateTime`] |
//! | [`error`] | [`IndexError`] and [`ValidationError`] |
//! | [`fetcher`] | Wire-format types and the upstream [`Fetcher`] |
//! | [`transport`] | HTTP client abstraction (reqwest in production) |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use feargreed_core::{FearGreedClient, UtcDateTime};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FearGreedClient::new();
//!
//!     let now = client.current().await?;
//!     println!("{} ({})", now.score, now.rating);
//!
//!     let since = UtcDateTime::parse("2020-06-01T00:00:00Z")?;
//!     for reading in client.historical(Some(since), None).await? {
//!         println!("{} {}", reading.observed_at, reading.score);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every failure aborts the whole call and propagates; nothing is retried
//! or swallowed. [`IndexError`] distinguishes transport failures from
//! payload-shape failures so callers can tell a network problem from an
//! upstream schema change:
//!
//! ```rust
//! use feargreed_core::IndexError;
//!
//! fn handle_error(error: IndexError) {
//!     match error {
//!         IndexError::Transport(_) | IndexError::UpstreamStatus { .. } => {
//!             // Network-class failure; a later call may succeed.
//!         }
//!         IndexError::MissingHistoricalData | IndexError::MalformedPayload { .. } => {
//!             // Upstream shape changed; the integration needs updating.
//!         }
//!         IndexError::Validation(_) => {
//!             // Upstream sent a value outside the documented domain.
//!         }
//!     }
//! }
//! ```

pub mod archive;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod transport;

pub use client::FearGreedClient;
pub use config::{Endpoints, UserAgentPool, ARCHIVE_CSV_URL, DEFAULT_USER_AGENTS, GRAPH_DATA_URL};
pub use domain::{SentimentReading, UtcDateTime};
pub use error::{IndexError, ValidationError};
pub use fetcher::{CurrentEntry, Fetcher, GraphData, HistoricalEntry, HistoricalSection};
pub use transport::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, StaticHttpClient,
};
