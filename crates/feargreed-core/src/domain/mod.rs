//! Canonical domain types for Fear & Greed readings.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SentimentReading`] | One score/rating observation at an instant |
//! | [`UtcDateTime`] | UTC timestamp shared by both upstream sources |
//!
//! Both types validate their invariants at construction time and are
//! immutable once built.

mod reading;
mod timestamp;

pub use reading::SentimentReading;
pub use timestamp::UtcDateTime;
