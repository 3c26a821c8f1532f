//! Bot commands and their registration.
//!
//! The same three commands are reachable as prefixed text messages
//! (`!create-webhook Alerts`) and as slash commands. Both paths are parsed into an
//! `Invocation` and run through the `Dispatcher`, so they share all behaviour apart
//! from how the reply is delivered.

use serenity::all::{
    ChannelType, CommandOptionType, CreateCommand, CreateCommandOption, Permissions,
};

use crate::config::BotSettings;

pub mod create_webhook;
pub mod dispatch;
pub mod list_webhooks;
pub mod parse;
pub mod reply;
pub mod server_stats;

#[cfg(test)]
mod test;

/// Name of the optional string argument on create-webhook.
pub const NAME_OPTION: &str = "name";
/// Name of the optional channel argument on create-webhook.
pub const CHANNEL_OPTION: &str = "channel";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandName {
    CreateWebhook,
    ListWebhooks,
    ServerStats,
}

impl CommandName {
    pub const ALL: [CommandName; 3] = [
        CommandName::CreateWebhook,
        CommandName::ListWebhooks,
        CommandName::ServerStats,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateWebhook => "create-webhook",
            Self::ListWebhooks => "list-webhooks",
            Self::ServerStats => "server-stats",
        }
    }

    /// Looks up a command by its exact registered name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|command| command.as_str() == name)
    }

    fn description(self) -> &'static str {
        match self {
            Self::CreateWebhook => "Create a webhook in this channel",
            Self::ListWebhooks => "List the webhooks created in this server",
            Self::ServerStats => "Show the servers this bot has joined",
        }
    }

    /// Whether slash command replies are hidden from everyone but the caller.
    ///
    /// Webhook replies contain webhook tokens.
    pub fn ephemeral(self) -> bool {
        !matches!(self, Self::ServerStats)
    }

    /// Whether the command only makes sense inside a guild.
    pub fn requires_guild(self) -> bool {
        !matches!(self, Self::ServerStats)
    }

    /// Permissions the invoking member must hold, with a display name for errors.
    ///
    /// Enforced on both triggers. For slash commands it is also the default member
    /// permission, so Discord hides the command from members without it.
    pub fn required_permission(self) -> Option<(Permissions, &'static str)> {
        match self {
            Self::CreateWebhook | Self::ListWebhooks => {
                Some((Permissions::MANAGE_WEBHOOKS, "Manage Webhooks"))
            }
            Self::ServerStats => None,
        }
    }

    pub fn is_enabled(self, settings: &BotSettings) -> bool {
        match self {
            Self::ServerStats => settings.guild_tracking,
            Self::CreateWebhook | Self::ListWebhooks => true,
        }
    }

    pub(crate) fn failure_label(self) -> &'static str {
        match self {
            Self::CreateWebhook => "Failed to create webhook",
            Self::ListWebhooks => "Failed to retrieve webhooks",
            Self::ServerStats => "Failed to retrieve servers",
        }
    }
}

/// Builds the slash commands to register for the current settings.
///
/// server-stats is only registered while guild tracking is enabled. The webhook
/// commands default to members who can manage webhooks, and the channel argument
/// only offers channels that can hold webhooks.
pub fn create_commands(settings: &BotSettings) -> Vec<CreateCommand> {
    CommandName::ALL
        .into_iter()
        .filter(|command| command.is_enabled(settings))
        .map(|command| {
            let mut builder = CreateCommand::new(command.as_str())
                .description(command.description())
                .dm_permission(!command.requires_guild());
            if let Some((permission, _)) = command.required_permission() {
                builder = builder.default_member_permissions(permission);
            }

            match command {
                CommandName::CreateWebhook => builder
                    .add_option(
                        CreateCommandOption::new(
                            CommandOptionType::String,
                            NAME_OPTION,
                            "Name of the webhook",
                        )
                        .required(false),
                    )
                    .add_option(
                        CreateCommandOption::new(
                            CommandOptionType::Channel,
                            CHANNEL_OPTION,
                            "Channel to create the webhook in (defaults to this one)",
                        )
                        .channel_types(vec![ChannelType::Text, ChannelType::News])
                        .required(false),
                    ),
                CommandName::ListWebhooks | CommandName::ServerStats => builder,
            }
        })
        .collect()
}
