use crate::cli::ScrapeArgs;
use lead_scout::config::{AppConfig, CampaignConfig, CampaignError};
use lead_scout::error::AppError;
use lead_scout::notify::Notifier;
use lead_scout::telemetry;
use lead_scout::workflows::prospecting::{
    GooglePlacesClient, LeadScorer, Pacing, ProspectingRun, RunClock, RunSettings,
};
use tracing::info;

pub(crate) fn run_scrape(args: ScrapeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let campaign = CampaignConfig::from_path(&args.config)?;
    let niches = campaign.select(&args.selection())?;

    let radius_miles = args.radius.unwrap_or(campaign.geography.radius_miles);
    if !radius_miles.is_finite() || radius_miles <= 0.0 {
        return Err(CampaignError::Invalid("--radius must be greater than zero".to_string()).into());
    }

    let credentials = config.places_credentials()?;
    let client = GooglePlacesClient::new(credentials, &config.http)?;

    let settings = RunSettings {
        postal_code: args
            .zip_code
            .clone()
            .unwrap_or_else(|| campaign.geography.anchor_zip.clone()),
        radius_miles,
        min_score: args.min_score,
        hot_threshold: campaign.hot_threshold(),
        output_dir: args.output_dir.clone(),
    };

    info!(
        environment = ?config.environment,
        niches = niches.len(),
        postal_code = %settings.postal_code,
        min_score = settings.min_score,
        "starting lead scrape"
    );

    let run = ProspectingRun::new(
        &client,
        LeadScorer::new(campaign.scoring_model.weights),
        Pacing::default(),
        RunClock::now(),
    );
    let summary = run.execute(&settings, &niches)?;

    let message = summary.message();
    println!("\n{message}");
    Notifier::from_config(&config.notifications).notify(&message);

    Ok(())
}
