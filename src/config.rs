use std::time::Duration;

use crate::error::config::ConfigError;

/// Webhook name used when create-webhook is invoked without one.
pub const DEFAULT_WEBHOOK_NAME: &str = "DefaultWebhookName";
const DEFAULT_COMMAND_PREFIX: &str = "!";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub struct Config {
    pub discord_token: String,
    pub database_url: String,

    pub bot: BotSettings,
}

/// Runtime switches for the bot's behaviour.
///
/// Each field maps to an optional environment variable; see `Config::from_lookup`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotSettings {
    /// Marker that starts a text command, e.g. `!` in `!list-webhooks`.
    pub command_prefix: String,
    pub default_webhook_name: String,
    pub text_commands: bool,
    pub slash_commands: bool,
    /// Track joined guilds and expose the server-stats command.
    pub guild_tracking: bool,
    /// Deadline applied to every Discord API call and database operation.
    pub request_timeout: Duration,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            command_prefix: DEFAULT_COMMAND_PREFIX.to_string(),
            default_webhook_name: DEFAULT_WEBHOOK_NAME.to_string(),
            text_commands: true,
            slash_commands: true,
            guild_tracking: true,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable if present
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and optional ones valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DISCORD_TOKEN` or `DATABASE_URL` missing
    /// - `Err(ConfigError::InvalidEnvVar)` - An optional variable failed to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required =
            |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let defaults = BotSettings::default();

        let request_timeout = match get("REQUEST_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "REQUEST_TIMEOUT_SECS".to_string(),
                        value,
                        expected: "a positive number of seconds",
                    })
                }
            },
            None => defaults.request_timeout,
        };

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            database_url: required("DATABASE_URL")?,
            bot: BotSettings {
                command_prefix: get("COMMAND_PREFIX").unwrap_or(defaults.command_prefix),
                default_webhook_name: get("DEFAULT_WEBHOOK_NAME")
                    .map(|name| name.trim().to_string())
                    .unwrap_or(defaults.default_webhook_name),
                text_commands: parse_flag(
                    "ENABLE_TEXT_COMMANDS",
                    get("ENABLE_TEXT_COMMANDS"),
                    defaults.text_commands,
                )?,
                slash_commands: parse_flag(
                    "ENABLE_SLASH_COMMANDS",
                    get("ENABLE_SLASH_COMMANDS"),
                    defaults.slash_commands,
                )?,
                guild_tracking: parse_flag(
                    "ENABLE_GUILD_TRACKING",
                    get("ENABLE_GUILD_TRACKING"),
                    defaults.guild_tracking,
                )?,
                request_timeout,
            },
        })
    }
}

fn parse_flag(name: &str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            expected: "true or false",
        }),
    }
}
