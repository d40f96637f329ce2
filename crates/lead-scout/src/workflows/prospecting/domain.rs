use serde::Serialize;

/// Geocoded center of the search radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnchorPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl AnchorPoint {
    pub fn as_location_param(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

/// Unprocessed text-search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCandidate {
    pub place_id: String,
    pub name: Option<String>,
    pub address: Option<String>,
}

/// Operational state reported by Place Details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BusinessStatus {
    Operational,
    ClosedTemporarily,
    ClosedPermanently,
    Other(String),
}

impl BusinessStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "OPERATIONAL" => Self::Operational,
            "CLOSED_TEMPORARILY" => Self::ClosedTemporarily,
            "CLOSED_PERMANENTLY" => Self::ClosedPermanently,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Operational => "OPERATIONAL",
            Self::ClosedTemporarily => "CLOSED_TEMPORARILY",
            Self::ClosedPermanently => "CLOSED_PERMANENTLY",
            Self::Other(raw) => raw,
        }
    }
}

/// Candidate with the contact, reputation, and status fields from Place Details.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EnrichedCandidate {
    pub place_id: String,
    pub name: String,
    pub formatted_address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub maps_url: Option<String>,
    pub rating: Option<f64>,
    pub review_count: u32,
    pub business_status: Option<BusinessStatus>,
}

impl EnrichedCandidate {
    pub fn has_phone(&self) -> bool {
        present(&self.phone)
    }

    pub fn has_website(&self) -> bool {
        present(&self.website)
    }

    pub fn is_operational(&self) -> bool {
        self.business_status == Some(BusinessStatus::Operational)
    }

    pub fn is_permanently_closed(&self) -> bool {
        self.business_status == Some(BusinessStatus::ClosedPermanently)
    }

    /// Second comma-separated address segment, e.g. "Alpharetta".
    pub fn city(&self) -> &str {
        self.address_part(1)
    }

    /// Third comma-separated address segment, e.g. "GA 30022".
    pub fn state_zip(&self) -> &str {
        self.address_part(2)
    }

    fn address_part(&self, index: usize) -> &str {
        self.formatted_address
            .split(',')
            .nth(index)
            .map(str::trim)
            .unwrap_or("")
    }
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
        }
    }
}

/// Ranked output row. Email, owner, and notes are filled in by hand later.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredLead {
    pub candidate: EnrichedCandidate,
    pub score: u8,
    pub niche_id: String,
    pub search_keyword: String,
    pub status: LeadStatus,
    pub email: String,
    pub owner_name: String,
    pub notes: String,
    pub scraped_at: String,
}

impl ScoredLead {
    pub fn new(
        candidate: EnrichedCandidate,
        score: u8,
        niche_id: impl Into<String>,
        search_keyword: impl Into<String>,
        scraped_at: impl Into<String>,
    ) -> Self {
        Self {
            candidate,
            score,
            niche_id: niche_id.into(),
            search_keyword: search_keyword.into(),
            status: LeadStatus::New,
            email: String::new(),
            owner_name: String::new(),
            notes: String::new(),
            scraped_at: scraped_at.into(),
        }
    }

    pub fn place_id(&self) -> &str {
        &self.candidate.place_id
    }
}
