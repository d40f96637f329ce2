mod cli;
mod scrape;

use lead_scout::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
