use std::time::{Duration, Instant};

use super::common::*;
use crate::workflows::prospecting::gateway::SearchRequest;
use crate::workflows::prospecting::search::{PlaceSearch, MAX_PAGES};

#[test]
fn pagination_stops_after_three_pages() {
    let gateway = FakePlacesGateway::new()
        .with_page("spa", &["a1", "a2"], Some("t2"))
        .with_page("t2", &["b1"], Some("t3"))
        .with_page("t3", &["c1"], Some("t4"))
        .with_page("t4", &["d1"], Some("t5"));

    let results = PlaceSearch::new(&gateway, Duration::ZERO).collect("spa", anchor(), 40_233);

    assert_eq!(gateway.search_count(), MAX_PAGES);
    let ids: Vec<_> = results.iter().map(|c| c.place_id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2", "b1", "c1"]);
}

#[test]
fn continuation_requests_carry_only_the_token() {
    let gateway = FakePlacesGateway::new()
        .with_page("spa", &["a1"], Some("t2"))
        .with_page("t2", &["b1"], None);

    PlaceSearch::new(&gateway, Duration::ZERO).collect("spa", anchor(), 1_000);

    let requests = gateway.search_requests.lock().expect("search log");
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0],
        SearchRequest::Initial {
            query: "spa".to_string(),
            anchor: anchor(),
            radius_meters: 1_000,
        }
    );
    assert_eq!(
        requests[1],
        SearchRequest::Continuation {
            page_token: "t2".to_string()
        }
    );
}

#[test]
fn zero_results_yields_nothing() {
    let gateway = FakePlacesGateway::new();
    let results = PlaceSearch::new(&gateway, Duration::ZERO).collect("nothing", anchor(), 1_000);
    assert!(results.is_empty());
    assert_eq!(gateway.search_count(), 1);
}

#[test]
fn failed_continuation_keeps_earlier_pages() {
    let gateway = FakePlacesGateway::new()
        .with_page("spa", &["a1", "a2"], Some("t2"))
        .with_failed_page("t2", "INVALID_REQUEST");

    let results = PlaceSearch::new(&gateway, Duration::ZERO).collect("spa", anchor(), 1_000);

    assert_eq!(results.len(), 2);
    assert_eq!(gateway.search_count(), 2);
}

#[test]
fn failed_first_page_returns_empty() {
    let gateway = FakePlacesGateway::new().with_failed_page("spa", "REQUEST_DENIED");
    let results = PlaceSearch::new(&gateway, Duration::ZERO).collect("spa", anchor(), 1_000);
    assert!(results.is_empty());
}

#[test]
fn waits_before_each_continuation_page() {
    let gateway = FakePlacesGateway::new()
        .with_page("spa", &["a1"], Some("t2"))
        .with_page("t2", &["b1"], Some("t3"))
        .with_page("t3", &["c1"], None);
    let delay = Duration::from_millis(20);

    let started = Instant::now();
    let results = PlaceSearch::new(&gateway, delay).collect("spa", anchor(), 1_000);

    assert_eq!(results.len(), 3);
    assert!(started.elapsed() >= delay * 2);
}

#[test]
fn single_page_search_does_not_wait() {
    let gateway = FakePlacesGateway::new().with_page("spa", &["a1", "a2"], None);
    let delay = Duration::from_millis(500);

    let started = Instant::now();
    let results = PlaceSearch::new(&gateway, delay).collect("spa", anchor(), 1_000);

    assert_eq!(results.len(), 2);
    assert!(started.elapsed() < delay);
}
