use crate::scrape::run_scrape;
use clap::{ArgGroup, Args, Parser};
use lead_scout::config::NicheSelection;
use lead_scout::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "scraper",
    about = "Scrape Google Maps for local SMB leads and write a ranked CSV per niche",
    version
)]
struct Cli {
    #[command(flatten)]
    scrape: ScrapeArgs,
}

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .args(["niche", "all_niches"])
))]
pub(crate) struct ScrapeArgs {
    /// Path to the lead-generation campaign config (JSON)
    #[arg(long)]
    pub(crate) config: PathBuf,
    /// Niche id to scrape (e.g. med_spa)
    #[arg(long)]
    pub(crate) niche: Option<String>,
    /// Scrape every niche in the config, in priority order
    #[arg(long)]
    pub(crate) all_niches: bool,
    /// Override the anchor zip code from the config
    #[arg(long = "zip")]
    pub(crate) zip_code: Option<String>,
    /// Override the search radius (miles) from the config
    #[arg(long)]
    pub(crate) radius: Option<f64>,
    /// Minimum fit score to include in output (0 keeps everything)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) min_score: u8,
    /// Directory for CSV output
    #[arg(long, default_value = ".tmp")]
    pub(crate) output_dir: PathBuf,
}

impl ScrapeArgs {
    pub(crate) fn selection(&self) -> NicheSelection {
        match &self.niche {
            Some(id) => NicheSelection::Single(id.clone()),
            None => NicheSelection::All,
        }
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    run_scrape(cli.scrape)
}
