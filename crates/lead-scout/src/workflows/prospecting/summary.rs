use std::fmt::Write as _;
use std::path::PathBuf;

use super::domain::ScoredLead;
use crate::config::NicheDefinition;

/// Result of scraping one niche.
#[derive(Debug, Clone)]
pub struct NicheOutcome {
    pub niche_id: String,
    pub label: String,
    pub leads: Vec<ScoredLead>,
    pub hot: usize,
    pub output_path: PathBuf,
}

impl NicheOutcome {
    pub fn new(
        niche: &NicheDefinition,
        leads: Vec<ScoredLead>,
        hot_threshold: u8,
        output_path: PathBuf,
    ) -> Self {
        let hot = count_hot(&leads, hot_threshold);
        Self {
            niche_id: niche.id.clone(),
            label: niche.label.clone(),
            leads,
            hot,
            output_path,
        }
    }
}

/// Leads at or above the immediate-contact threshold.
pub fn count_hot(leads: &[ScoredLead], hot_threshold: u8) -> usize {
    leads
        .iter()
        .filter(|lead| lead.score >= hot_threshold)
        .count()
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub postal_code: String,
    pub radius_miles: f64,
    pub completed_at: String,
    pub hot_threshold: u8,
    pub output_dir: PathBuf,
    pub niches: Vec<NicheOutcome>,
}

impl RunSummary {
    pub fn total_leads(&self) -> usize {
        self.niches.iter().map(|niche| niche.leads.len()).sum()
    }

    pub fn total_hot(&self) -> usize {
        self.niches.iter().map(|niche| niche.hot).sum()
    }

    /// Multi-line summary posted to chat and printed at the end of a run.
    pub fn message(&self) -> String {
        let mut message = String::from("*Google Maps Scraper \u{2014} Run Complete*\n");
        let _ = writeln!(
            message,
            "Zip: {} | Radius: {}mi | {}",
            self.postal_code, self.radius_miles, self.completed_at
        );
        let _ = writeln!(
            message,
            "Total leads: {} | Hot (score \u{2265} {}): {}",
            self.total_leads(),
            self.hot_threshold,
            self.total_hot()
        );

        let lines: Vec<String> = self
            .niches
            .iter()
            .map(|niche| {
                format!(
                    "  \u{2022} {}: {} leads, {} hot",
                    niche.label,
                    niche.leads.len(),
                    niche.hot
                )
            })
            .collect();
        message.push_str(&lines.join("\n"));

        let _ = write!(
            message,
            "\n\nCSVs saved to: `{}/`",
            self.output_dir.display()
        );
        message
    }
}
