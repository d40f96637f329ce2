use std::collections::HashSet;

use super::domain::ScoredLead;

/// Deduplicates leads by place id, filters by minimum score, and orders the
/// survivors by score descending.
///
/// The first lead offered for a place id wins, even if a later keyword would
/// have scored it higher.
#[derive(Debug, Default)]
pub struct LeadRanker {
    min_score: u8,
    seen: HashSet<String>,
    leads: Vec<ScoredLead>,
}

impl LeadRanker {
    pub fn new(min_score: u8) -> Self {
        Self {
            min_score,
            ..Self::default()
        }
    }

    /// Returns `false` when the place id was already offered.
    pub fn offer(&mut self, lead: ScoredLead) -> bool {
        if !self.seen.insert(lead.place_id().to_string()) {
            return false;
        }
        self.leads.push(lead);
        true
    }

    pub fn finish(self) -> Vec<ScoredLead> {
        let min_score = self.min_score;
        let mut ranked: Vec<ScoredLead> = self
            .leads
            .into_iter()
            .filter(|lead| lead.score >= min_score)
            .collect();
        // stable: equal scores keep discovery order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}

pub fn rank_leads<I>(leads: I, min_score: u8) -> Vec<ScoredLead>
where
    I: IntoIterator<Item = ScoredLead>,
{
    let mut ranker = LeadRanker::new(min_score);
    for lead in leads {
        ranker.offer(lead);
    }
    ranker.finish()
}
