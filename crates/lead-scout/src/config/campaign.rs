use crate::workflows::prospecting::ScoringWeights;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

const DEFAULT_PRIORITY: u32 = 99;

/// Lead-generation campaign loaded from the JSON config file.
#[derive(Debug, Clone, Deserialize)]
pub struct CampaignConfig {
    pub geography: Geography,
    pub target_niches: Vec<NicheDefinition>,
    pub thresholds: Thresholds,
    #[serde(default)]
    pub scoring_model: ScoringModel,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geography {
    pub anchor_zip: String,
    pub radius_miles: f64,
}

/// A local-business search category and the keywords used to find it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NicheDefinition {
    pub id: String,
    pub label: String,
    pub google_maps_keywords: Vec<String>,
    #[serde(default = "default_priority")]
    pub priority: u32,
}

fn default_priority() -> u32 {
    DEFAULT_PRIORITY
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thresholds {
    pub hot_immediate_contact: u8,
}

/// Everything under `scoring_model` other than `weights` is descriptive and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringModel {
    #[serde(default)]
    pub weights: ScoringWeights,
}

/// Which niches a run should cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NicheSelection {
    Single(String),
    All,
}

#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    #[error("failed to read campaign config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid campaign config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid campaign config: {0}")]
    Invalid(String),
    #[error("unknown niche '{requested}'. Valid options: {}", valid.join(", "))]
    UnknownNiche {
        requested: String,
        valid: Vec<String>,
    },
}

impl CampaignConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CampaignError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CampaignError> {
        let config: CampaignConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), CampaignError> {
        if self.geography.anchor_zip.trim().is_empty() {
            return Err(CampaignError::Invalid(
                "geography.anchor_zip must not be empty".to_string(),
            ));
        }
        let radius = self.geography.radius_miles;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(CampaignError::Invalid(
                "geography.radius_miles must be greater than zero".to_string(),
            ));
        }
        if self.target_niches.is_empty() {
            return Err(CampaignError::Invalid(
                "target_niches must list at least one niche".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for niche in &self.target_niches {
            if !seen.insert(niche.id.as_str()) {
                return Err(CampaignError::Invalid(format!(
                    "duplicate niche id '{}'",
                    niche.id
                )));
            }
            if niche.google_maps_keywords.is_empty() {
                return Err(CampaignError::Invalid(format!(
                    "niche '{}' has no google_maps_keywords",
                    niche.id
                )));
            }
        }

        Ok(())
    }

    /// Niches to process, ordered by ascending priority. Ties keep file order.
    pub fn select(&self, selection: &NicheSelection) -> Result<Vec<&NicheDefinition>, CampaignError> {
        let mut niches: Vec<&NicheDefinition> = match selection {
            NicheSelection::All => self.target_niches.iter().collect(),
            NicheSelection::Single(id) => {
                let found: Vec<_> = self
                    .target_niches
                    .iter()
                    .filter(|niche| &niche.id == id)
                    .collect();
                if found.is_empty() {
                    return Err(CampaignError::UnknownNiche {
                        requested: id.clone(),
                        valid: self.target_niches.iter().map(|n| n.id.clone()).collect(),
                    });
                }
                found
            }
        };

        niches.sort_by_key(|niche| niche.priority);
        Ok(niches)
    }

    pub fn hot_threshold(&self) -> u8 {
        self.thresholds.hot_immediate_contact
    }
}
