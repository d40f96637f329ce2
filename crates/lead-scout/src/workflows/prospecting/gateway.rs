use std::fmt::Debug;

use super::domain::{AnchorPoint, EnrichedCandidate, RawCandidate};

/// A text search request. Continuation requests carry only the page token.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchRequest {
    Initial {
        query: String,
        anchor: AnchorPoint,
        radius_meters: u32,
    },
    Continuation {
        page_token: String,
    },
}

/// One page of text-search results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub candidates: Vec<RawCandidate>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("places request failed: {0}")]
    Transport(String),
    #[error("places response could not be decoded: {0}")]
    Decode(String),
    #[error("places API returned status {status}")]
    Status { status: String },
}

/// Remote place lookups the pipeline depends on.
pub trait PlacesGateway: Debug {
    fn geocode(&self, postal_code: &str) -> Result<AnchorPoint, GatewayError>;

    /// `ZERO_RESULTS` is an empty page, not an error.
    fn text_search(&self, request: &SearchRequest) -> Result<SearchPage, GatewayError>;

    fn place_details(&self, place_id: &str) -> Result<EnrichedCandidate, GatewayError>;
}
