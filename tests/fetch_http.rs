// tests/fetch_http.rs
use httpmock::prelude::*;
use lead_scout::config::settings::{ListingSettings, DEFAULT_USER_AGENT};
use lead_scout::ingest::{ListingSource, RedditJsonProvider};
use lead_scout::{FailureKind, FetchError};

const LISTING: &str = include_str!("fixtures/listing.json");

fn settings_for(url: String) -> ListingSettings {
    ListingSettings {
        url,
        ..ListingSettings::default()
    }
}

#[tokio::test]
async fn ok_listing_parses_all_items_in_order() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/r/multi/new.json")
                .query_param("limit", "50")
                .header("user-agent", DEFAULT_USER_AGENT)
                .header("accept", "application/json")
                .header_exists("accept-language");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(LISTING);
        })
        .await;

    let provider =
        RedditJsonProvider::new(&settings_for(server.url("/r/multi/new.json?limit=50"))).unwrap();
    let items = provider.fetch_listing().await.expect("listing ok");

    mock.assert_async().await;
    assert_eq!(items.len(), 6);
    assert_eq!(items[0].title, "Help with IRS penalty");
    assert_eq!(items[5].title, "New contract template");
    assert_eq!(items[5].body, "");
}

#[tokio::test]
async fn forbidden_is_reported_as_blocked() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/new.json");
            then.status(403).body("<html>blocked</html>");
        })
        .await;

    let provider = RedditJsonProvider::new(&settings_for(server.url("/new.json"))).unwrap();
    let err = provider.fetch_listing().await.unwrap_err();
    assert!(matches!(err, FetchError::Blocked { status: 403 }));
    assert_eq!(err.kind(), FailureKind::Blocked);
}

#[tokio::test]
async fn other_statuses_are_http_errors() {
    for status in [404u16, 429, 500, 204] {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/new.json");
                then.status(status);
            })
            .await;

        let provider = RedditJsonProvider::new(&settings_for(server.url("/new.json"))).unwrap();
        let err = provider.fetch_listing().await.unwrap_err();
        assert!(
            matches!(err, FetchError::Http { status: s } if s == status),
            "status {status}: {err:?}"
        );
    }
}

#[tokio::test]
async fn garbage_body_is_malformed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/new.json");
            then.status(200).body(r#"{"data": {"kids": []}}"#);
        })
        .await;

    let provider = RedditJsonProvider::new(&settings_for(server.url("/new.json"))).unwrap();
    let err = provider.fetch_listing().await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Malformed);
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    // Port 1 on loopback: nothing listens there.
    let provider =
        RedditJsonProvider::new(&settings_for("http://127.0.0.1:1/new.json".to_string())).unwrap();
    let err = provider.fetch_listing().await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Transport);
}
