use crate::config::{CampaignError, ConfigError};
use crate::telemetry::TelemetryError;
use crate::workflows::prospecting::{GatewayError, ProspectingError};
use std::fmt;

/// Run-aborting failures. Anything that reaches this type ends the process
/// with a non-zero exit code.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Campaign(CampaignError),
    Telemetry(TelemetryError),
    Client(GatewayError),
    Prospecting(ProspectingError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Campaign(err) => write!(f, "campaign error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Client(err) => write!(f, "places client error: {}", err),
            AppError::Prospecting(err) => write!(f, "scrape failed: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Campaign(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Client(err) => Some(err),
            AppError::Prospecting(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<CampaignError> for AppError {
    fn from(value: CampaignError) -> Self {
        Self::Campaign(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<GatewayError> for AppError {
    fn from(value: GatewayError) -> Self {
        Self::Client(value)
    }
}

impl From<ProspectingError> for AppError {
    fn from(value: ProspectingError) -> Self {
        Self::Prospecting(value)
    }
}
