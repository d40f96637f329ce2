pub mod campaign;

use std::env;
use std::fmt;
use std::time::Duration;

pub use campaign::{
    CampaignConfig, CampaignError, Geography, NicheDefinition, NicheSelection, ScoringModel,
    Thresholds,
};

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Process-level configuration assembled from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub http: HttpConfig,
    pub notifications: NotificationConfig,
    places: Option<PlacesCredentials>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let timeout_secs = env::var("PLACES_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "15".to_string())
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTimeout)?;

        let places = non_empty_var("GOOGLE_PLACES_API_KEY").map(PlacesCredentials::new);

        let telegram = match (
            non_empty_var("TELEGRAM_BOT_TOKEN"),
            non_empty_var("TELEGRAM_CHAT_ID"),
        ) {
            (Some(bot_token), Some(chat_id)) => Some(TelegramConfig { bot_token, chat_id }),
            _ => None,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            http: HttpConfig {
                timeout: Duration::from_secs(timeout_secs),
            },
            notifications: NotificationConfig {
                slack_webhook_url: non_empty_var("SLACK_WEBHOOK_URL"),
                telegram,
            },
            places,
        })
    }

    /// The Places API key is only required once the pipeline is about to call out.
    pub fn places_credentials(&self) -> Result<&PlacesCredentials, ConfigError> {
        self.places.as_ref().ok_or(ConfigError::MissingApiKey)
    }

    pub fn with_places_credentials(mut self, credentials: PlacesCredentials) -> Self {
        self.places = Some(credentials);
        self
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// API key for the Google Geocoding and Places endpoints.
#[derive(Clone, PartialEq, Eq)]
pub struct PlacesCredentials {
    api_key: String,
}

impl PlacesCredentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for PlacesCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacesCredentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Outbound HTTP settings shared by every Places request.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout: Duration,
}

/// Optional run-summary destinations.
#[derive(Debug, Clone, Default)]
pub struct NotificationConfig {
    pub slack_webhook_url: Option<String>,
    pub telegram: Option<TelegramConfig>,
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingApiKey,
    InvalidTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingApiKey => write!(f, "GOOGLE_PLACES_API_KEY is not set"),
            ConfigError::InvalidTimeout => {
                write!(f, "PLACES_REQUEST_TIMEOUT_SECS must be a whole number of seconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
