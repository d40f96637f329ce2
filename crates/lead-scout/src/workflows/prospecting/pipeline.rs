use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use super::domain::{AnchorPoint, ScoredLead};
use super::enrichment::DetailEnricher;
use super::export::{self, ExportError};
use super::gateway::PlacesGateway;
use super::geocode::{resolve_anchor, GeocodeFailure};
use super::ranking::LeadRanker;
use super::scoring::LeadScorer;
use super::search::PlaceSearch;
use super::summary::{NicheOutcome, RunSummary};
use crate::config::NicheDefinition;

const METERS_PER_MILE: f64 = 1609.34;

pub fn radius_meters(radius_miles: f64) -> u32 {
    (radius_miles * METERS_PER_MILE).floor() as u32
}

/// Flat client-side delays that keep the run under Google's implicit limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub page_token_delay: Duration,
    pub enrichment_delay: Duration,
}

impl Pacing {
    pub fn none() -> Self {
        Self {
            page_token_delay: Duration::ZERO,
            enrichment_delay: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            page_token_delay: Duration::from_secs(2),
            enrichment_delay: Duration::from_millis(100),
        }
    }
}

const DATE_FORMAT: &str = "%Y-%m-%d";
const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Start and completion stamps for a run. File names and `scraped_at` use the
/// start; the summary uses the completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunClock {
    started_at: NaiveDateTime,
    completed_at: Option<NaiveDateTime>,
}

impl RunClock {
    /// Starts now; the completion stamp is read when the run finishes.
    pub fn now() -> Self {
        Self {
            started_at: Local::now().naive_local(),
            completed_at: None,
        }
    }

    /// Frozen at one instant for both start and completion.
    pub fn fixed(at: NaiveDateTime) -> Self {
        Self::between(at, at)
    }

    pub fn between(started_at: NaiveDateTime, completed_at: NaiveDateTime) -> Self {
        Self {
            started_at,
            completed_at: Some(completed_at),
        }
    }

    pub fn run_date(&self) -> String {
        self.started_at.format(DATE_FORMAT).to_string()
    }

    pub fn scraped_at(&self) -> String {
        self.started_at.format(STAMP_FORMAT).to_string()
    }

    pub fn completed_at(&self) -> String {
        self.completed_at
            .unwrap_or_else(|| Local::now().naive_local())
            .format(STAMP_FORMAT)
            .to_string()
    }
}

/// Per-invocation inputs after CLI overrides have been applied.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub postal_code: String,
    pub radius_miles: f64,
    pub min_score: u8,
    pub hot_threshold: u8,
    pub output_dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ProspectingError {
    #[error(transparent)]
    Geocode(#[from] GeocodeFailure),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Sequential lead discovery across one or more niches.
#[derive(Debug)]
pub struct ProspectingRun<'a> {
    gateway: &'a dyn PlacesGateway,
    scorer: LeadScorer,
    pacing: Pacing,
    clock: RunClock,
}

impl<'a> ProspectingRun<'a> {
    pub fn new(
        gateway: &'a dyn PlacesGateway,
        scorer: LeadScorer,
        pacing: Pacing,
        clock: RunClock,
    ) -> Self {
        Self {
            gateway,
            scorer,
            pacing,
            clock,
        }
    }

    pub fn execute(
        &self,
        settings: &RunSettings,
        niches: &[&NicheDefinition],
    ) -> Result<RunSummary, ProspectingError> {
        let anchor = resolve_anchor(self.gateway, &settings.postal_code)?;
        let radius = radius_meters(settings.radius_miles);
        info!(
            latitude = %format!("{:.5}", anchor.latitude),
            longitude = %format!("{:.5}", anchor.longitude),
            radius_miles = settings.radius_miles,
            radius_meters = radius,
            "anchor resolved"
        );

        let mut outcomes = Vec::with_capacity(niches.len());
        for niche in niches {
            outcomes.push(self.scrape_niche(niche, anchor, radius, settings)?);
        }

        Ok(RunSummary {
            postal_code: settings.postal_code.clone(),
            radius_miles: settings.radius_miles,
            completed_at: self.clock.completed_at(),
            hot_threshold: settings.hot_threshold,
            output_dir: settings.output_dir.clone(),
            niches: outcomes,
        })
    }

    /// Searches every keyword of one niche, then ranks and writes its CSV.
    pub fn scrape_niche(
        &self,
        niche: &NicheDefinition,
        anchor: AnchorPoint,
        radius_meters: u32,
        settings: &RunSettings,
    ) -> Result<NicheOutcome, ExportError> {
        info!(
            niche = %niche.id,
            label = %niche.label,
            keywords = niche.google_maps_keywords.len(),
            "scraping niche"
        );

        let search = PlaceSearch::new(self.gateway, self.pacing.page_token_delay);
        let enricher = DetailEnricher::new(self.gateway);
        let mut ranker = LeadRanker::new(settings.min_score);
        let mut discovered: HashSet<String> = HashSet::new();
        let scraped_at = self.clock.scraped_at();

        for keyword in &niche.google_maps_keywords {
            let query = format!("{keyword} near {}", settings.postal_code);

            for raw in search.collect(&query, anchor, radius_meters) {
                if !discovered.insert(raw.place_id.clone()) {
                    continue;
                }

                let details = enricher.enrich(&raw.place_id);
                self.pace_enrichment();

                let Some(candidate) = details else {
                    continue;
                };
                if candidate.is_permanently_closed() {
                    debug!(place_id = %raw.place_id, "skipping permanently closed business");
                    continue;
                }

                let breakdown = self.scorer.score(&candidate);
                ranker.offer(ScoredLead::new(
                    candidate,
                    breakdown.total,
                    niche.id.as_str(),
                    keyword.as_str(),
                    scraped_at.as_str(),
                ));
            }
        }

        let leads = ranker.finish();
        let output_path =
            export::output_path(&settings.output_dir, &niche.id, &self.clock.run_date());
        export::write_leads(&output_path, &leads)?;

        let outcome = NicheOutcome::new(niche, leads, settings.hot_threshold, output_path);
        info!(
            niche = %outcome.niche_id,
            leads = outcome.leads.len(),
            hot = outcome.hot,
            hot_threshold = settings.hot_threshold,
            "niche complete"
        );
        Ok(outcome)
    }

    fn pace_enrichment(&self) {
        if !self.pacing.enrichment_delay.is_zero() {
            std::thread::sleep(self.pacing.enrichment_delay);
        }
    }
}
