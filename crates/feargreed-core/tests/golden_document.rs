//! Golden-document tests: exact values against a captured graph-data
//! response.

mod support;

use std::sync::Arc;

use feargreed_core::{UtcDateTime, DEFAULT_USER_AGENTS};
use support::{client_with, FixtureTransport};

#[tokio::test]
async fn current_reading_matches_golden_document() {
    let client = client_with(Arc::new(FixtureTransport::golden()));

    let reading = client.current().await.expect("golden document parses");

    assert_eq!(reading.score, 30.8254);
    assert_eq!(reading.rating, "fear");
    assert_eq!(
        reading.observed_at,
        UtcDateTime::from_unix_millis(1_650_903_669_254).expect("in range")
    );
}

#[tokio::test]
async fn historical_without_bounds_returns_the_full_live_window() {
    let client = client_with(Arc::new(FixtureTransport::golden()));

    let readings = client
        .historical(None, None)
        .await
        .expect("golden document parses");

    assert_eq!(readings.len(), 269);

    let first = &readings[0];
    assert_eq!(first.score, 51.03333333333334);
    assert_eq!(first.rating, "neutral");
    assert_eq!(
        first.observed_at,
        UtcDateTime::from_unix_millis(1_619_395_200_000).expect("in range")
    );

    let last = readings.last().expect("non-empty");
    assert_eq!(last.score, 30.8254);
    assert_eq!(last.rating, "fear");
    assert_eq!(
        last.observed_at,
        UtcDateTime::from_unix_millis(1_650_903_669_254).expect("in range")
    );
}

#[tokio::test]
async fn historical_output_is_sorted_ascending_by_timestamp() {
    let client = client_with(Arc::new(FixtureTransport::golden()));

    let readings = client
        .historical(None, None)
        .await
        .expect("golden document parses");

    for pair in readings.windows(2) {
        assert!(
            pair[0].observed_at <= pair[1].observed_at,
            "out of order: {} then {}",
            pair[0].observed_at,
            pair[1].observed_at
        );
    }
}

#[tokio::test]
async fn current_request_carries_a_pooled_user_agent_and_no_suffix() {
    let transport = Arc::new(FixtureTransport::golden());
    let client = client_with(transport.clone());

    client.current().await.expect("golden document parses");

    let requests = transport.recorded();
    assert_eq!(requests.len(), 1);
    assert!(
        requests[0].url.ends_with("/graphdata"),
        "no date suffix without a start bound: {}",
        requests[0].url
    );

    let user_agent = requests[0]
        .headers
        .get("user-agent")
        .expect("user-agent header set");
    assert!(DEFAULT_USER_AGENTS.contains(&user_agent.as_str()));
}
