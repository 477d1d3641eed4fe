use time::macros::date;

use crate::{UtcDateTime, ValidationError};

/// Live graph-data endpoint serving the current index and its recent
/// historical series.
pub const GRAPH_DATA_URL: &str = "https://production.dataviz.cnn.io/index/fearandgreed/graphdata";

/// Archival CSV dataset covering dates the live endpoint does not serve.
pub const ARCHIVE_CSV_URL: &str =
    "https://raw.githubusercontent.com/whit3rabbit/fear-greed-data/main/fear-greed-2011-2023.csv";

/// Desktop browser user-agents rotated to avoid naive bot filters.
pub const DEFAULT_USER_AGENTS: [&str; 5] = [
    // Chrome on Windows 10
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/101.0.4951.67 Safari/537.36",
    // Chrome on macOS
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 12_4) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/101.0.4951.67 Safari/537.36",
    // Chrome on Linux
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/101.0.4951.67 Safari/537.36",
    // Firefox on Windows
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:100.0) Gecko/20100101 Firefox/100.0",
    // Firefox on macOS
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 12.4; rv:100.0) Gecko/20100101 Firefox/100.0",
];

/// Upstream endpoint configuration.
///
/// The cutoff is the instant where archival coverage ends and live coverage
/// begins. All three values are configuration rather than embedded literals
/// so tests can substitute them and upstream URL changes stay one-line
/// fixes.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub graph_data_url: String,
    pub archive_csv_url: String,
    pub cutoff: UtcDateTime,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            graph_data_url: String::from(GRAPH_DATA_URL),
            archive_csv_url: String::from(ARCHIVE_CSV_URL),
            cutoff: UtcDateTime::from_midnight(date!(2021 - 02 - 01)),
        }
    }
}

/// Pool of user-agent strings sampled per request.
///
/// Selection is not security sensitive; `fastrand` is plenty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgentPool {
    agents: Vec<String>,
}

impl UserAgentPool {
    pub fn new(agents: Vec<String>) -> Result<Self, ValidationError> {
        if agents.is_empty() {
            return Err(ValidationError::EmptyUserAgentPool);
        }
        Ok(Self { agents })
    }

    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    pub fn pick(&self) -> &str {
        &self.agents[fastrand::usize(..self.agents.len())]
    }
}

impl Default for UserAgentPool {
    fn default() -> Self {
        Self {
            agents: DEFAULT_USER_AGENTS.iter().map(|ua| ua.to_string()).collect(),
        }
    }
}
