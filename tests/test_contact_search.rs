//! End-to-end contact search over discovered AddressBook databases.

mod fixtures;

use contacts_mcp_server::models::SourceStage;
use contacts_mcp_server::search::AggregationStrategy;
use contacts_mcp_server::services::{
    ContactSearchRequest, ContactSearchService, ContactSearchServiceImpl,
};
use contacts_mcp_server::sources::schema::DEFAULT_DB_FILE_NAME;
use contacts_mcp_server::sources::DirectorySourceProvider;
use contacts_mcp_server::SearchError;
use fixtures::{RecordFixture, SourcesDir};
use std::fs;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

fn two_sources() -> SourcesDir {
    let dir = SourcesDir::new();
    dir.add_source(
        "alpha",
        &[
            RecordFixture::person("Jane", "Doe").phone("555-123-4567"),
            RecordFixture::person("Zed", "Adams").email("zed@a.com"),
            RecordFixture::organization("Acme Corp").phone("+44 20 7946 0958"),
        ],
    );
    dir.add_source(
        "beta",
        &[
            RecordFixture::person("Jane", "Doe").phone("+1 (555) 123-4567"),
            RecordFixture::person("Mary", "Major").email("mary@b.com"),
        ],
    );
    dir
}

fn service(dir: &SourcesDir, strategy: AggregationStrategy) -> ContactSearchServiceImpl {
    let provider = DirectorySourceProvider::new(dir.path(), DEFAULT_DB_FILE_NAME);
    ContactSearchServiceImpl::new(Arc::new(provider), strategy)
}

fn request(first: &str, last: Option<&str>, limit: usize, offset: usize) -> ContactSearchRequest {
    ContactSearchRequest {
        first_name: first.to_string(),
        last_name: last.map(str::to_string),
        limit: Some(limit),
        offset: Some(offset),
    }
}

#[tokio::test]
async fn test_search_merges_sources_in_order() {
    let dir = two_sources();
    let response = service(&dir, AggregationStrategy::Sequential)
        .search(request("", None, 50, 0), CancellationToken::new())
        .await
        .unwrap();

    let entries: Vec<(&str, &str)> = response
        .data
        .iter()
        .map(|e| (e.name.as_str(), e.handle.as_str()))
        .collect();
    assert_eq!(
        entries,
        [
            ("Acme Corp", "+442079460958"),
            ("Zed Adams", "zed@a.com"),
            ("Jane Doe", "+15551234567"),
            ("Mary Major", "mary@b.com"),
        ]
    );

    // The duplicate Jane Doe row is still counted
    assert_eq!(response.pagination.total, 5);
    assert!(!response.pagination.has_more);
    assert!(!response.partial);
}

#[tokio::test]
async fn test_page_spanning_two_sources() {
    let dir = two_sources();
    let response = service(&dir, AggregationStrategy::Sequential)
        .search(request("", None, 2, 2), CancellationToken::new())
        .await
        .unwrap();

    // Both rows on this page are Jane Doe's number and collapse to one entry
    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].handle, "+15551234567");

    let pagination = response.pagination;
    assert_eq!(pagination.total, 5);
    assert_eq!(pagination.limit, 2);
    assert_eq!(pagination.offset, 2);
    assert_eq!(pagination.page, 2);
    assert_eq!(pagination.total_pages, 3);
    assert!(pagination.has_more);
}

#[tokio::test]
async fn test_first_and_last_name_search() {
    let dir = two_sources();
    let response = service(&dir, AggregationStrategy::Sequential)
        .search(request("ma", Some("maj"), 10, 0), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(response.pagination.total, 1);
    assert_eq!(response.data[0].name, "Mary Major");
}

#[tokio::test]
async fn test_offset_past_end_is_empty() {
    let dir = two_sources();
    let response = service(&dir, AggregationStrategy::Sequential)
        .search(request("", None, 10, 40), CancellationToken::new())
        .await
        .unwrap();

    assert!(response.data.is_empty());
    assert_eq!(response.pagination.total, 5);
    assert!(!response.pagination.has_more);
    assert_eq!(response.pagination.page, 5);
}

#[tokio::test]
async fn test_no_sources_found() {
    let dir = SourcesDir::new();
    let response = service(&dir, AggregationStrategy::Sequential)
        .search(request("jane", None, 10, 0), CancellationToken::new())
        .await
        .unwrap();

    assert!(response.data.is_empty());
    assert_eq!(response.pagination.total, 0);
    assert_eq!(response.pagination.total_pages, 0);
}

#[tokio::test]
async fn test_empty_handles_counted_but_not_returned() {
    let dir = SourcesDir::new();
    dir.add_source(
        "alpha",
        &[
            RecordFixture::person("Jane", "Doe").email(""),
            RecordFixture::person("Bob", "Roe").email("bob@x.com"),
        ],
    );

    let response = service(&dir, AggregationStrategy::Sequential)
        .search(request("", None, 10, 0), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(response.pagination.total, 2);
    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].name, "Bob Roe");
    assert_eq!(response.data[0].handle, "bob@x.com");
    assert!(!response.partial);
}

#[tokio::test]
async fn test_unreadable_database_reported_as_skipped() {
    let dir = two_sources();
    dir.add_empty_candidate("broken");
    let broken = dir.path().join("broken").join(DEFAULT_DB_FILE_NAME);
    fs::write(&broken, "this is not a database").unwrap();

    let response = service(&dir, AggregationStrategy::Sequential)
        .search(request("", None, 50, 0), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(response.data.len(), 4);
    assert_eq!(response.pagination.total, 5);
    assert!(response.partial);
    assert_eq!(response.skipped_sources.len(), 1);
    assert_eq!(response.skipped_sources[0].source, broken.display().to_string());
    assert_eq!(response.skipped_sources[0].stage, SourceStage::Count);
}

#[tokio::test]
async fn test_strategies_return_identical_pages() {
    let dir = two_sources();
    let sequential = service(&dir, AggregationStrategy::Sequential);
    let concurrent = service(&dir, AggregationStrategy::Concurrent);

    for (limit, offset) in [(1, 0), (2, 2), (3, 1), (50, 0), (2, 4), (0, 0)] {
        let expected = sequential
            .search(request("", None, limit, offset), CancellationToken::new())
            .await
            .unwrap();
        let actual = concurrent
            .search(request("", None, limit, offset), CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(expected, actual, "limit={} offset={}", limit, offset);
    }
}

#[tokio::test]
async fn test_invalid_limit_rejected() {
    let dir = two_sources();
    let service = service(&dir, AggregationStrategy::Sequential).with_limits(10, 20);

    let err = service
        .search(request("", None, 21, 0), CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::InvalidParameters(_)));
}

#[tokio::test]
async fn test_cancelled_search() {
    let dir = two_sources();
    let cancel = CancellationToken::new();
    cancel.cancel();

    for strategy in [AggregationStrategy::Sequential, AggregationStrategy::Concurrent] {
        let err = service(&dir, strategy)
            .search(request("", None, 10, 0), cancel.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Cancelled));
    }
}

#[tokio::test]
async fn test_response_json_shape() {
    let dir = two_sources();
    let response = service(&dir, AggregationStrategy::Sequential)
        .search(request("zed", None, 10, 0), CancellationToken::new())
        .await
        .unwrap();

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["data"][0]["name"], "Zed Adams");
    assert_eq!(json["data"][0]["handle"], "zed@a.com");
    assert_eq!(json["pagination"]["hasMore"], false);
    assert_eq!(json["pagination"]["totalPages"], 1);
    assert_eq!(json["partial"], false);
    assert!(json.get("skippedSources").is_none());
}

#[tokio::test]
async fn test_metrics_track_searches() {
    let dir = two_sources();
    let service = service(&dir, AggregationStrategy::Sequential);

    service
        .search(request("", None, 10, 0), CancellationToken::new())
        .await
        .unwrap();
    let cancel = CancellationToken::new();
    cancel.cancel();
    service
        .search(request("", None, 10, 0), cancel)
        .await
        .unwrap_err();

    assert_eq!(service.metrics().searches_total(), 2);
    assert_eq!(service.metrics().searches_failed_total(), 1);
    assert_eq!(service.metrics().entries_returned_total(), 4);
}
