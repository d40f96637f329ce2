//! Local-business lead discovery: geocode an anchor postal code, search each
//! niche keyword around it, enrich and score the hits, then write one ranked
//! CSV per niche.
//!
//! Only a geocoding failure aborts the run. Search and detail failures are
//! logged and contained to the keyword or candidate they hit.

pub mod domain;
pub mod enrichment;
pub mod export;
pub mod gateway;
pub mod geocode;
pub mod google;
pub mod pipeline;
pub mod ranking;
pub mod scoring;
pub mod search;
pub mod summary;

#[cfg(test)]
mod tests;

pub use domain::{
    AnchorPoint, BusinessStatus, EnrichedCandidate, LeadStatus, RawCandidate, ScoredLead,
};
pub use enrichment::DetailEnricher;
pub use export::{output_path, write_leads, ExportError, CSV_COLUMNS};
pub use gateway::{GatewayError, PlacesGateway, SearchPage, SearchRequest};
pub use geocode::{resolve_anchor, GeocodeFailure};
pub use google::GooglePlacesClient;
pub use pipeline::{radius_meters, Pacing, ProspectingError, ProspectingRun, RunClock, RunSettings};
pub use ranking::{rank_leads, LeadRanker};
pub use scoring::{LeadScorer, ScoreBreakdown, ScoringWeights};
pub use search::{PlaceSearch, MAX_PAGES};
pub use summary::{count_hot, NicheOutcome, RunSummary};
