use tracing::warn;

use super::domain::EnrichedCandidate;
use super::gateway::PlacesGateway;

/// Best-effort Place Details lookup: `None` means "no details available" and
/// the caller skips the candidate.
#[derive(Debug)]
pub struct DetailEnricher<'a> {
    gateway: &'a dyn PlacesGateway,
}

impl<'a> DetailEnricher<'a> {
    pub fn new(gateway: &'a dyn PlacesGateway) -> Self {
        Self { gateway }
    }

    pub fn enrich(&self, place_id: &str) -> Option<EnrichedCandidate> {
        match self.gateway.place_details(place_id) {
            Ok(candidate) => Some(candidate),
            Err(err) => {
                warn!(place_id, error = %err, "failed to fetch place details");
                None
            }
        }
    }
}
