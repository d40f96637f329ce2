use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use super::domain::ScoredLead;

pub const CSV_COLUMNS: [&str; 19] = [
    "niche",
    "search_keyword",
    "business_name",
    "place_id",
    "address",
    "city",
    "state_zip",
    "phone",
    "website",
    "google_maps_url",
    "rating",
    "review_count",
    "business_status",
    "fit_score",
    "status",
    "email",
    "owner_name",
    "notes",
    "scraped_at",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to prepare output location {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write lead CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// `leads_{niche}_{YYYY-MM-DD}.csv` inside `output_dir`.
pub fn output_path(output_dir: &Path, niche_id: &str, run_date: &str) -> PathBuf {
    output_dir.join(format!("leads_{niche_id}_{run_date}.csv"))
}

/// Writes a header row followed by one row per lead, creating parent
/// directories as needed.
pub fn write_leads(path: &Path, leads: &[ScoredLead]) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let file = fs::File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_to(file, leads)?;

    info!(count = leads.len(), path = %path.display(), "wrote leads");
    Ok(())
}

pub fn write_to<W: Write>(writer: W, leads: &[ScoredLead]) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_COLUMNS)?;
    for lead in leads {
        csv_writer.serialize(LeadRow::from(lead))?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct LeadRow<'a> {
    niche: &'a str,
    search_keyword: &'a str,
    business_name: &'a str,
    place_id: &'a str,
    address: &'a str,
    city: &'a str,
    state_zip: &'a str,
    phone: &'a str,
    website: &'a str,
    google_maps_url: &'a str,
    rating: String,
    review_count: u32,
    business_status: &'a str,
    fit_score: u8,
    status: &'static str,
    email: &'a str,
    owner_name: &'a str,
    notes: &'a str,
    scraped_at: &'a str,
}

impl<'a> From<&'a ScoredLead> for LeadRow<'a> {
    fn from(lead: &'a ScoredLead) -> Self {
        let candidate = &lead.candidate;
        Self {
            niche: &lead.niche_id,
            search_keyword: &lead.search_keyword,
            business_name: &candidate.name,
            place_id: &candidate.place_id,
            address: &candidate.formatted_address,
            city: candidate.city(),
            state_zip: candidate.state_zip(),
            phone: candidate.phone.as_deref().unwrap_or(""),
            website: candidate.website.as_deref().unwrap_or(""),
            google_maps_url: candidate.maps_url.as_deref().unwrap_or(""),
            rating: candidate.rating.map(format_rating).unwrap_or_default(),
            review_count: candidate.review_count,
            business_status: candidate
                .business_status
                .as_ref()
                .map(|status| status.as_str())
                .unwrap_or(""),
            fit_score: lead.score,
            status: lead.status.as_str(),
            email: &lead.email,
            owner_name: &lead.owner_name,
            notes: &lead.notes,
            scraped_at: &lead.scraped_at,
        }
    }
}

fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{rating:.1}")
    } else {
        rating.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::prospecting::domain::{BusinessStatus, EnrichedCandidate};

    fn render(leads: &[ScoredLead]) -> String {
        let mut buffer = Vec::new();
        write_to(&mut buffer, leads).expect("csv renders");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn empty_lead_list_still_writes_header() {
        let rendered = render(&[]);
        assert_eq!(rendered.trim_end(), CSV_COLUMNS.join(","));
    }

    #[test]
    fn row_flattens_candidate_fields() {
        let candidate = EnrichedCandidate {
            place_id: "p1".to_string(),
            name: "Glow, Inc.".to_string(),
            formatted_address: "1 Main St, Cumming, GA 30040, USA".to_string(),
            phone: Some("(470) 555-0100".to_string()),
            website: None,
            maps_url: Some("https://maps.google.com/?cid=1".to_string()),
            rating: Some(4.0),
            review_count: 12,
            business_status: Some(BusinessStatus::Operational),
        };
        let lead = ScoredLead::new(candidate, 70, "med_spa", "botox", "2026-10-18 09:30");
        let rendered = render(&[lead]);
        let mut lines = rendered.lines();
        lines.next();
        let row = lines.next().expect("data row");
        assert_eq!(
            row,
            "med_spa,botox,\"Glow, Inc.\",p1,\"1 Main St, Cumming, GA 30040, USA\",Cumming,GA 30040,\
(470) 555-0100,,https://maps.google.com/?cid=1,4.0,12,OPERATIONAL,70,new,,,,2026-10-18 09:30"
        );
    }

    #[test]
    fn unknown_rating_and_status_are_blank() {
        let lead = ScoredLead::new(
            EnrichedCandidate {
                place_id: "p2".to_string(),
                ..EnrichedCandidate::default()
            },
            5,
            "dental",
            "dentist",
            "2026-10-18 09:30",
        );
        let rendered = render(&[lead]);
        let mut reader = csv::Reader::from_reader(rendered.as_bytes());
        let record = reader.records().next().expect("row").expect("valid row");
        assert_eq!(&record[10], "");
        assert_eq!(&record[11], "0");
        assert_eq!(&record[12], "");
    }

    #[test]
    fn output_path_uses_niche_and_date() {
        let path = output_path(Path::new(".tmp"), "med_spa", "2026-10-18");
        assert_eq!(path, Path::new(".tmp/leads_med_spa_2026-10-18.csv"));
    }

    #[test]
    fn write_leads_creates_missing_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/out/leads.csv");
        write_leads(&path, &[]).expect("write succeeds");
        let contents = fs::read_to_string(&path).expect("file exists");
        assert!(contents.starts_with("niche,search_keyword"));
    }
}
