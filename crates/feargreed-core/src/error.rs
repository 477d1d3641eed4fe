use thiserror::Error;

use crate::transport::HttpError;

/// Domain validation errors raised while normalizing upstream values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("score must be a finite number")]
    NonFiniteScore,
    #[error("score {value} is outside the index range 0..=100")]
    ScoreOutOfRange { value: f64 },
    #[error("timestamp must be ISO-8601: '{value}'")]
    InvalidTimestamp { value: String },
    #[error("millisecond epoch {millis} does not map to a representable instant")]
    TimestampOutOfRange { millis: i64 },
    #[error("user-agent pool must contain at least one entry")]
    EmptyUserAgentPool,
}

/// Top-level error type for index retrieval.
///
/// The taxonomy separates three failure classes callers treat differently:
/// transport problems (`Transport`, `UpstreamStatus`) which may clear on a
/// later call, payload-shape problems (`MalformedPayload`,
/// `MissingHistoricalData`) which signal the upstream integration changed,
/// and local normalization failures (`Validation`).
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("transport failure: {0}")]
    Transport(#[from] HttpError),

    #[error("{endpoint} endpoint returned status {status}")]
    UpstreamStatus { endpoint: &'static str, status: u16 },

    #[error("malformed {endpoint} payload: {reason}")]
    MalformedPayload { endpoint: &'static str, reason: String },

    /// The graph document was reachable but carries no historical `data`
    /// array. Distinct from transport failures so callers can tell "network
    /// down" from "upstream schema changed".
    #[error("graph data document has no historical data array")]
    MissingHistoricalData,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl IndexError {
    pub fn malformed_payload(endpoint: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            endpoint,
            reason: reason.into(),
        }
    }

    /// True when the failure came from the transport layer rather than the
    /// shape of the payload.
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::UpstreamStatus { .. })
    }
}
