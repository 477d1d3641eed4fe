use serde::{Deserialize, Serialize};

use crate::{UtcDateTime, ValidationError};

/// One normalized Fear & Greed observation.
///
/// `rating` is kept exactly as the source provides it ("extreme fear",
/// "fear", "neutral", "greed", "extreme greed"); archival rows carry no
/// label and use the empty string. Values are constructed per call and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReading {
    pub score: f64,
    pub rating: String,
    pub observed_at: UtcDateTime,
}

impl SentimentReading {
    pub fn new(
        score: f64,
        rating: impl Into<String>,
        observed_at: UtcDateTime,
    ) -> Result<Self, ValidationError> {
        if !score.is_finite() {
            return Err(ValidationError::NonFiniteScore);
        }
        if !(0.0..=100.0).contains(&score) {
            return Err(ValidationError::ScoreOutOfRange { value: score });
        }

        Ok(Self {
            score,
            rating: rating.into(),
            observed_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn midnight() -> UtcDateTime {
        UtcDateTime::parse("2021-02-01T00:00:00Z").expect("timestamp")
    }

    #[test]
    fn accepts_scores_on_the_domain_boundary() {
        assert!(SentimentReading::new(0.0, "extreme fear", midnight()).is_ok());
        assert!(SentimentReading::new(100.0, "extreme greed", midnight()).is_ok());
    }

    #[test]
    fn accepts_empty_rating_for_archival_rows() {
        let reading = SentimentReading::new(43.0, "", midnight()).expect("valid");
        assert!(reading.rating.is_empty());
    }

    #[test]
    fn rejects_out_of_range_scores() {
        let err = SentimentReading::new(100.5, "greed", midnight()).expect_err("must fail");
        assert!(matches!(err, ValidationError::ScoreOutOfRange { .. }));
    }

    #[test]
    fn rejects_non_finite_scores() {
        let err = SentimentReading::new(f64::NAN, "fear", midnight()).expect_err("must fail");
        assert!(matches!(err, ValidationError::NonFiniteScore));
    }
}
