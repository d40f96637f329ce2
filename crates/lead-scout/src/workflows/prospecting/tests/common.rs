use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use chrono::NaiveDate;

use crate::config::NicheDefinition;
use crate::workflows::prospecting::domain::{
    AnchorPoint, BusinessStatus, EnrichedCandidate, RawCandidate, ScoredLead,
};
use crate::workflows::prospecting::gateway::{
    GatewayError, PlacesGateway, SearchPage, SearchRequest,
};
use crate::workflows::prospecting::pipeline::{RunClock, RunSettings};

/// Scripted gateway: search pages are keyed by query (first page) or page
/// token (continuations); details are keyed by place id.
#[derive(Debug, Default)]
pub(super) struct FakePlacesGateway {
    anchor: Option<AnchorPoint>,
    pages: HashMap<String, Result<SearchPage, String>>,
    details: HashMap<String, EnrichedCandidate>,
    pub(super) search_requests: Mutex<Vec<SearchRequest>>,
    pub(super) detail_requests: Mutex<Vec<String>>,
}

impl FakePlacesGateway {
    pub(super) fn new() -> Self {
        Self {
            anchor: Some(anchor()),
            ..Self::default()
        }
    }

    pub(super) fn without_anchor() -> Self {
        Self::default()
    }

    pub(super) fn with_page(mut self, key: &str, ids: &[&str], next: Option<&str>) -> Self {
        let page = SearchPage {
            candidates: ids.iter().map(|id| raw(id)).collect(),
            next_page_token: next.map(str::to_string),
        };
        self.pages.insert(key.to_string(), Ok(page));
        self
    }

    pub(super) fn with_failed_page(mut self, key: &str, status: &str) -> Self {
        self.pages.insert(key.to_string(), Err(status.to_string()));
        self
    }

    pub(super) fn with_details(mut self, candidate: EnrichedCandidate) -> Self {
        self.details.insert(candidate.place_id.clone(), candidate);
        self
    }

    pub(super) fn search_count(&self) -> usize {
        self.search_requests.lock().expect("search log").len()
    }

    pub(super) fn detail_calls(&self) -> Vec<String> {
        self.detail_requests.lock().expect("detail log").clone()
    }
}

impl PlacesGateway for FakePlacesGateway {
    fn geocode(&self, _postal_code: &str) -> Result<AnchorPoint, GatewayError> {
        self.anchor.ok_or_else(|| GatewayError::Status {
            status: "ZERO_RESULTS".to_string(),
        })
    }

    fn text_search(&self, request: &SearchRequest) -> Result<SearchPage, GatewayError> {
        self.search_requests
            .lock()
            .expect("search log")
            .push(request.clone());

        let key = match request {
            SearchRequest::Initial { query, .. } => query,
            SearchRequest::Continuation { page_token } => page_token,
        };

        match self.pages.get(key) {
            Some(Ok(page)) => Ok(page.clone()),
            Some(Err(status)) => Err(GatewayError::Status {
                status: status.clone(),
            }),
            None => Ok(SearchPage::default()),
        }
    }

    fn place_details(&self, place_id: &str) -> Result<EnrichedCandidate, GatewayError> {
        self.detail_requests
            .lock()
            .expect("detail log")
            .push(place_id.to_string());

        self.details
            .get(place_id)
            .cloned()
            .ok_or_else(|| GatewayError::Transport("connection reset".to_string()))
    }
}

pub(super) fn anchor() -> AnchorPoint {
    AnchorPoint {
        latitude: 34.0754,
        longitude: -84.2941,
    }
}

pub(super) fn raw(place_id: &str) -> RawCandidate {
    RawCandidate {
        place_id: place_id.to_string(),
        name: None,
        address: None,
    }
}

/// Website, phone, operational, rating 3.5, 12 reviews: scores 95.
pub(super) fn strong_candidate(place_id: &str) -> EnrichedCandidate {
    EnrichedCandidate {
        place_id: place_id.to_string(),
        name: format!("Business {place_id}"),
        formatted_address: "100 Main St, Alpharetta, GA 30022, USA".to_string(),
        phone: Some("(770) 555-0100".to_string()),
        website: Some("https://example.com".to_string()),
        maps_url: Some(format!("https://maps.google.com/?cid={place_id}")),
        rating: Some(3.5),
        review_count: 12,
        business_status: Some(BusinessStatus::Operational),
    }
}

/// Nothing but 150 reviews: scores 5.
pub(super) fn weak_candidate(place_id: &str) -> EnrichedCandidate {
    EnrichedCandidate {
        place_id: place_id.to_string(),
        name: format!("Business {place_id}"),
        review_count: 150,
        ..EnrichedCandidate::default()
    }
}

pub(super) fn lead(place_id: &str, score: u8, keyword: &str) -> ScoredLead {
    ScoredLead::new(
        weak_candidate(place_id),
        score,
        "med_spa",
        keyword,
        "2026-10-18 09:30",
    )
}

pub(super) fn niche(id: &str, keywords: &[&str]) -> NicheDefinition {
    NicheDefinition {
        id: id.to_string(),
        label: format!("Niche {id}"),
        google_maps_keywords: keywords.iter().map(|k| k.to_string()).collect(),
        priority: 1,
    }
}

pub(super) fn settings(output_dir: &Path, min_score: u8) -> RunSettings {
    RunSettings {
        postal_code: "30022".to_string(),
        radius_miles: 25.0,
        min_score,
        hot_threshold: 75,
        output_dir: output_dir.to_path_buf(),
    }
}

pub(super) fn clock() -> RunClock {
    RunClock::fixed(
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .expect("valid date")
            .and_hms_opt(9, 30, 0)
            .expect("valid time"),
    )
}
