mod rules;
mod weights;

pub use weights::ScoringWeights;

use super::domain::EnrichedCandidate;
use serde::Serialize;

/// Stateless scorer applying the weight table to an enriched candidate.
#[derive(Debug, Clone, Default)]
pub struct LeadScorer {
    weights: ScoringWeights,
}

impl LeadScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn score(&self, candidate: &EnrichedCandidate) -> ScoreBreakdown {
        let fit = rules::fit_score(candidate, &self.weights);
        let signal = rules::signal_score(candidate, &self.weights);
        let reachability = rules::reachability_score(candidate, &self.weights);

        ScoreBreakdown {
            fit,
            signal,
            reachability,
            total: rules::total_score(fit, signal, reachability),
        }
    }
}

/// Sub-scores behind a lead's 0–100 total, kept for audits and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub fit: u8,
    pub signal: u8,
    pub reachability: u8,
    pub total: u8,
}

impl ScoreBreakdown {
    pub const FIT_CAP: u8 = rules::FIT_CAP;
    pub const SIGNAL_CAP: u8 = rules::SIGNAL_CAP;
    pub const REACHABILITY_CAP: u8 = rules::REACHABILITY_CAP;
    pub const TOTAL_CAP: u8 = rules::TOTAL_CAP;
}
