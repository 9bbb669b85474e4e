//! Configuration at ~/.config/phstatus/config.toml
//!
//! Every key can also be set from the environment with the `PHSTATUS_`
//! prefix and `__` between sections, e.g. `PHSTATUS_SLACK__TOKEN`.

use std::path::{Path, PathBuf};

use ::config::{Environment, File};
use phstatus_core::lookup::DEFAULT_LOOKAHEAD_DAYS;
use phstatus_core::provider::{CheckOptions, DEFAULT_NOTIFICATION_TAG, DEFAULT_NOTIFICATION_TITLE};
use phstatus_core::status::{DEFAULT_TODAY_EMOJI, DEFAULT_UPCOMING_EMOJI, StatusEmojis};
use phstatus_core::{PhStatusError, PhStatusResult};
use serde::Deserialize;

const DEFAULT_SLACK_API_BASE: &str = "https://slack.com/api";
const DEFAULT_NTFY_SERVER: &str = "https://ntfy.sh";

fn default_lookahead_days() -> u32 {
    DEFAULT_LOOKAHEAD_DAYS
}

fn default_today_emoji() -> String {
    DEFAULT_TODAY_EMOJI.to_string()
}

fn default_upcoming_emoji() -> String {
    DEFAULT_UPCOMING_EMOJI.to_string()
}

fn default_slack_api_base() -> String {
    DEFAULT_SLACK_API_BASE.to_string()
}

fn default_ntfy_server() -> String {
    DEFAULT_NTFY_SERVER.to_string()
}

fn default_ntfy_title() -> String {
    DEFAULT_NOTIFICATION_TITLE.to_string()
}

fn default_ntfy_tags() -> String {
    DEFAULT_NOTIFICATION_TAG.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Days after today to check for an upcoming holiday
    #[serde(default = "default_lookahead_days")]
    pub lookahead_days: u32,

    pub google: GoogleConfig,

    pub slack: SlackConfig,

    /// Push notifications are disabled when this section is absent
    #[serde(default)]
    pub ntfy: Option<NtfyConfig>,
}

/// OAuth credentials and the holiday calendar to watch
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub calendar_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlackConfig {
    /// User token with the `users.profile:write` scope
    pub token: String,

    #[serde(default = "default_today_emoji")]
    pub today_emoji: String,

    #[serde(default = "default_upcoming_emoji")]
    pub upcoming_emoji: String,

    #[serde(default = "default_slack_api_base")]
    pub api_base: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NtfyConfig {
    pub topic: String,

    #[serde(default = "default_ntfy_server")]
    pub server: String,

    #[serde(default = "default_ntfy_title")]
    pub title: String,

    #[serde(default = "default_ntfy_tags")]
    pub tags: String,
}

impl Config {
    /// Resolve the config file location, expanding `~` in an explicit path.
    pub fn config_path(explicit: Option<&str>) -> PhStatusResult<PathBuf> {
        if let Some(path) = explicit {
            return Ok(PathBuf::from(shellexpand::tilde(path).into_owned()));
        }

        let config_dir = dirs::config_dir()
            .ok_or_else(|| PhStatusError::Config("Could not determine config directory".into()))?
            .join("phstatus");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the file at `path`, with environment overrides on top.
    pub fn load(path: &Path) -> PhStatusResult<Self> {
        if !path.exists() {
            return Err(PhStatusError::Config(format!(
                "Config file not found at {}\n\n\
                Create one with:\n  \
                phstatus init",
                path.display()
            )));
        }

        let config: Config = ::config::Config::builder()
            .add_source(File::from(path).required(true))
            .add_source(
                Environment::with_prefix("PHSTATUS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| PhStatusError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PhStatusError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject required keys left empty, as in the generated template.
    fn validate(&self) -> PhStatusResult<()> {
        let mut required = vec![
            ("google.calendar_id", &self.google.calendar_id),
            ("google.client_id", &self.google.client_id),
            ("google.client_secret", &self.google.client_secret),
            ("google.refresh_token", &self.google.refresh_token),
            ("slack.token", &self.slack.token),
        ];
        if let Some(ntfy) = &self.ntfy {
            required.push(("ntfy.topic", &ntfy.topic));
        }

        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((key, _)) => Err(PhStatusError::Config(format!("Missing value for '{key}'"))),
            None => Ok(()),
        }
    }

    pub fn check_options(&self) -> CheckOptions {
        let (notification_title, notification_tag) = match &self.ntfy {
            Some(ntfy) => (ntfy.title.clone(), ntfy.tags.clone()),
            None => (default_ntfy_title(), default_ntfy_tags()),
        };

        CheckOptions {
            lookahead_days: self.lookahead_days,
            emojis: StatusEmojis {
                today: self.slack.today_emoji.clone(),
                upcoming: self.slack.upcoming_emoji.clone(),
            },
            notification_title,
            notification_tag,
        }
    }

    /// Write a config template with placeholders for the required keys.
    pub fn create_default_config(path: &Path, force: bool) -> PhStatusResult<()> {
        if path.exists() && !force {
            return Err(PhStatusError::Config(format!(
                "Config file already exists at {} (use --force to overwrite)",
                path.display()
            )));
        }

        let contents = format!(
            "\
# phstatus configuration

# Days after today to check for an upcoming holiday:
# lookahead_days = {DEFAULT_LOOKAHEAD_DAYS}

[google]
# Calendar to watch, e.g. \"en.singapore#holiday@group.v.calendar.google.com\"
calendar_id = \"\"
client_id = \"\"
client_secret = \"\"
refresh_token = \"\"

[slack]
# User token with the users.profile:write scope
token = \"\"
# today_emoji = \"{DEFAULT_TODAY_EMOJI}\"
# upcoming_emoji = \"{DEFAULT_UPCOMING_EMOJI}\"

# Uncomment to get a push notification whenever the status changes:
# [ntfy]
# topic = \"my-topic\"
# server = \"{DEFAULT_NTFY_SERVER}\"
# title = \"{DEFAULT_NOTIFICATION_TITLE}\"
# tags = \"{DEFAULT_NOTIFICATION_TAG}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;

        Ok(())
    }
}
