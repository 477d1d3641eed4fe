use crate::error::IndexError;
use crate::fetcher::Fetcher;
use crate::{SentimentReading, UtcDateTime};

/// High-level client for the Fear & Greed Index.
///
/// `current` returns the single latest reading; `historical` assembles one
/// chronologically sorted series from the live endpoint and, when the
/// requested range predates the cutoff, the archival CSV source.
#[derive(Clone)]
pub struct FearGreedClient {
    fetcher: Fetcher,
}

impl FearGreedClient {
    /// Client wired to the production endpoints.
    pub fn new() -> Self {
        Self::with_fetcher(Fetcher::new())
    }

    pub fn with_fetcher(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// The current index reading from the `fear_and_greed` object.
    ///
    /// # Errors
    ///
    /// Transport and status failures propagate from the fetcher; an absent
    /// or malformed `fear_and_greed` object is an
    /// [`IndexError::MalformedPayload`].
    pub async fn current(&self) -> Result<SentimentReading, IndexError> {
        let document = self.fetcher.graph_data(None).await?;
        let entry = document.fear_and_greed.ok_or_else(|| {
            IndexError::malformed_payload("graph data", "missing 'fear_and_greed' object")
        })?;

        let observed_at = UtcDateTime::parse(&entry.timestamp).map_err(|_| {
            IndexError::malformed_payload(
                "graph data",
                format!("unparseable timestamp '{}'", entry.timestamp),
            )
        })?;

        Ok(SentimentReading::new(entry.score, entry.rating, observed_at)?)
    }

    /// Historical readings, bounded inclusively by `start` and `end` when
    /// given.
    ///
    /// When `start` predates the cutoff the archival CSV supplies the
    /// portion strictly before it and the live request begins at the cutoff
    /// instead. The combined series is stable-sorted ascending by
    /// timestamp, so readings sharing an instant keep their source order.
    ///
    /// # Errors
    ///
    /// A live document without a historical `data` array yields
    /// [`IndexError::MissingHistoricalData`], deliberately distinct from
    /// transport failures.
    pub async fn historical(
        &self,
        start: Option<UtcDateTime>,
        end: Option<UtcDateTime>,
    ) -> Result<Vec<SentimentReading>, IndexError> {
        let cutoff = self.fetcher.endpoints().cutoff;
        let mut readings = Vec::new();

        // The live request never starts earlier than the cutoff; the archive
        // covers the stretch before it.
        let mut live_start = start;
        if let Some(from) = start {
            if from < cutoff {
                let csv = self.fetcher.archive_csv().await?;
                let mut archived = crate::archive::parse_window(&csv, from, cutoff)?;
                // The window filter only knows the cutoff; the end bound
                // applies to archive rows just as it does to live entries.
                if let Some(until) = end {
                    archived.retain(|reading| reading.observed_at <= until);
                }
                readings.extend(archived);
                live_start = Some(cutoff);
            }
        }

        let document = self.fetcher.graph_data(live_start.map(UtcDateTime::date)).await?;
        let data = document
            .fear_and_greed_historical
            .and_then(|section| section.data)
            .ok_or(IndexError::MissingHistoricalData)?;

        for entry in data {
            let observed_at = UtcDateTime::from_unix_millis(entry.x.round() as i64)?;

            // The URL suffix asks the server to trim the range, but the
            // server is not trusted to honor it exactly.
            if let Some(from) = live_start {
                if observed_at < from {
                    continue;
                }
            }
            if let Some(until) = end {
                if observed_at > until {
                    continue;
                }
            }

            readings.push(SentimentReading::new(entry.y, entry.rating, observed_at)?);
        }

        readings.sort_by(|a, b| a.observed_at.cmp(&b.observed_at));
        Ok(readings)
    }
}

impl Default for FearGreedClient {
    fn default() -> Self {
        Self::new()
    }
}
