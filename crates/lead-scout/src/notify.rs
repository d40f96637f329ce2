use std::time::Duration;

use serde_json::{json, Value};
use tokio::runtime::Runtime;
use tracing::{debug, info, warn};

use crate::config::NotificationConfig;

const NOTIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// A destination for the end-of-run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationChannel {
    Slack { webhook_url: String },
    Telegram { bot_token: String, chat_id: String },
}

impl NotificationChannel {
    pub fn name(&self) -> &'static str {
        match self {
            NotificationChannel::Slack { .. } => "slack",
            NotificationChannel::Telegram { .. } => "telegram",
        }
    }

    pub fn endpoint(&self) -> String {
        match self {
            NotificationChannel::Slack { webhook_url } => webhook_url.clone(),
            NotificationChannel::Telegram { bot_token, .. } => {
                format!("https://api.telegram.org/bot{bot_token}/sendMessage")
            }
        }
    }

    pub fn payload(&self, message: &str) -> Value {
        match self {
            NotificationChannel::Slack { .. } => json!({ "text": message }),
            NotificationChannel::Telegram { chat_id, .. } => json!({
                "chat_id": chat_id,
                "text": message,
                "parse_mode": "Markdown",
            }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification runtime unavailable: {0}")]
    Runtime(String),
    #[error("notification request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Posts messages to every configured channel. Delivery is best-effort: a
/// failing channel is logged and otherwise ignored.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    channels: Vec<NotificationChannel>,
}

impl Notifier {
    pub fn new(channels: Vec<NotificationChannel>) -> Self {
        Self { channels }
    }

    pub fn from_config(config: &NotificationConfig) -> Self {
        let mut channels = Vec::new();
        if let Some(webhook_url) = &config.slack_webhook_url {
            channels.push(NotificationChannel::Slack {
                webhook_url: webhook_url.clone(),
            });
        }
        if let Some(telegram) = &config.telegram {
            channels.push(NotificationChannel::Telegram {
                bot_token: telegram.bot_token.clone(),
                chat_id: telegram.chat_id.clone(),
            });
        }
        Self::new(channels)
    }

    pub fn channels(&self) -> &[NotificationChannel] {
        &self.channels
    }

    /// Returns the number of channels that accepted the message.
    pub fn notify(&self, message: &str) -> usize {
        if self.channels.is_empty() {
            debug!("no notification channels configured");
            return 0;
        }

        let runtime = match Runtime::new() {
            Ok(runtime) => runtime,
            Err(err) => {
                warn!(error = %NotifyError::Runtime(err.to_string()), "skipping notifications");
                return 0;
            }
        };
        let client = reqwest::Client::new();

        let mut delivered = 0;
        for channel in &self.channels {
            match runtime.block_on(deliver(&client, channel, message)) {
                Ok(()) => {
                    info!(channel = channel.name(), "run summary posted");
                    delivered += 1;
                }
                Err(err) => warn!(channel = channel.name(), error = %err, "notification failed"),
            }
        }
        delivered
    }
}

async fn deliver(
    client: &reqwest::Client,
    channel: &NotificationChannel,
    message: &str,
) -> Result<(), NotifyError> {
    client
        .post(channel.endpoint())
        .json(&channel.payload(message))
        .timeout(NOTIFY_TIMEOUT)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TelegramConfig;

    #[test]
    fn from_config_builds_each_configured_channel() {
        let config = NotificationConfig {
            slack_webhook_url: Some("https://hooks.slack.com/services/T/B/X".to_string()),
            telegram: Some(TelegramConfig {
                bot_token: "123:abc".to_string(),
                chat_id: "-100".to_string(),
            }),
        };
        let notifier = Notifier::from_config(&config);
        let names: Vec<_> = notifier.channels().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["slack", "telegram"]);
    }

    #[test]
    fn payloads_match_channel_formats() {
        let slack = NotificationChannel::Slack {
            webhook_url: "https://hooks.slack.com/x".to_string(),
        };
        assert_eq!(slack.payload("hi"), json!({ "text": "hi" }));
        assert_eq!(slack.endpoint(), "https://hooks.slack.com/x");

        let telegram = NotificationChannel::Telegram {
            bot_token: "123:abc".to_string(),
            chat_id: "42".to_string(),
        };
        assert_eq!(
            telegram.endpoint(),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
        assert_eq!(telegram.payload("hi")["chat_id"], "42");
        assert_eq!(telegram.payload("hi")["parse_mode"], "Markdown");
    }

    #[test]
    fn no_channels_sends_nothing() {
        assert_eq!(Notifier::default().notify("summary"), 0);
    }

    #[test]
    fn unreachable_channel_is_swallowed() {
        let notifier = Notifier::new(vec![NotificationChannel::Slack {
            webhook_url: "http://127.0.0.1:9/unreachable".to_string(),
        }]);
        assert_eq!(notifier.notify("summary"), 0);
    }
}
