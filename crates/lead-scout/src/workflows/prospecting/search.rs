use std::time::Duration;

use tracing::{info, warn};

use super::domain::{AnchorPoint, RawCandidate};
use super::gateway::{PlacesGateway, SearchRequest};

/// Text search pages hold up to 20 results, so this caps a keyword at 60.
pub const MAX_PAGES: usize = 3;

/// Paginated keyword search around the anchor point.
#[derive(Debug)]
pub struct PlaceSearch<'a> {
    gateway: &'a dyn PlacesGateway,
    page_token_delay: Duration,
}

impl<'a> PlaceSearch<'a> {
    pub fn new(gateway: &'a dyn PlacesGateway, page_token_delay: Duration) -> Self {
        Self {
            gateway,
            page_token_delay,
        }
    }

    /// Collects raw candidates for one query. A failing page ends pagination
    /// for this query only; pages already fetched are kept.
    pub fn collect(
        &self,
        query: &str,
        anchor: AnchorPoint,
        radius_meters: u32,
    ) -> Vec<RawCandidate> {
        let mut results = Vec::new();
        let mut request = SearchRequest::Initial {
            query: query.to_string(),
            anchor,
            radius_meters,
        };

        for page in 0..MAX_PAGES {
            if page > 0 && !self.page_token_delay.is_zero() {
                // Google rejects a page token used too soon after it was issued.
                std::thread::sleep(self.page_token_delay);
            }

            let response = match self.gateway.text_search(&request) {
                Ok(response) => response,
                Err(err) => {
                    warn!(query, page, error = %err, "places search failed; stopping pagination");
                    break;
                }
            };

            results.extend(response.candidates);

            match response.next_page_token {
                Some(page_token) => request = SearchRequest::Continuation { page_token },
                None => break,
            }
        }

        info!(query, found = results.len(), "collected raw search results");
        results
    }
}
