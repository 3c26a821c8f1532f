use sea_orm::DatabaseConnection;

use super::{
    create_webhook, list_webhooks,
    parse::{Invocation, TextMessage},
    reply::{self, Reply},
    server_stats, CommandName,
};
use crate::{
    bot::platform::{DiscordPlatform, ReplyTarget},
    config::BotSettings,
    error::bot::BotError,
    util::deadline::with_deadline,
};

/// Routes recognised commands to their handlers and delivers exactly one reply.
///
/// Handler errors end here: they are logged and turned into an error reply.
pub struct Dispatcher<'a> {
    pub(super) db: &'a DatabaseConnection,
    pub(super) platform: &'a dyn DiscordPlatform,
    pub(super) settings: &'a BotSettings,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        platform: &'a dyn DiscordPlatform,
        settings: &'a BotSettings,
    ) -> Self {
        Self {
            db,
            platform,
            settings,
        }
    }

    /// Handles a gateway message that may be a text command.
    ///
    /// Messages from the bot itself or from other bots are ignored.
    pub async fn dispatch_message(&self, bot_user_id: u64, message: &TextMessage) {
        if message.author_id == bot_user_id || message.author_is_bot {
            return;
        }
        if !self.settings.text_commands {
            return;
        }

        let Some(invocation) = Invocation::from_text(&self.settings.command_prefix, message)
        else {
            return;
        };

        self.dispatch(invocation).await;
    }

    /// Handles a slash command invocation.
    pub async fn dispatch_invocation(&self, bot_user_id: u64, invocation: Invocation) {
        if invocation.author_id == bot_user_id {
            return;
        }
        if !self.settings.slash_commands {
            return;
        }

        self.dispatch(invocation).await;
    }

    async fn dispatch(&self, invocation: Invocation) {
        let command = invocation.command;
        if !command.is_enabled(self.settings) {
            tracing::debug!("Ignoring disabled command {}", command.as_str());
            return;
        }

        tracing::debug!(
            "Running {} for user {} in guild {:?}",
            command.as_str(),
            invocation.author_id,
            invocation.guild_id
        );

        let ephemeral =
            command.ephemeral() && matches!(invocation.reply_to, ReplyTarget::Interaction { .. });

        // Interactions must be acknowledged before the command's outbound calls run
        if let Err(e) = self.defer(&invocation.reply_to, ephemeral).await {
            tracing::error!("Failed to acknowledge {}: {}", command.as_str(), e);
            return;
        }

        let reply = match self.execute(&invocation).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Command {} failed: {}", command.as_str(), e);
                reply::command_failed(command, &e)
            }
        };
        let reply = reply.ephemeral(ephemeral);

        if let Err(e) = self.send(&invocation.reply_to, &reply).await {
            tracing::error!("Failed to deliver {} reply: {}", command.as_str(), e);
        }
    }

    async fn execute(&self, invocation: &Invocation) -> Result<Reply, BotError> {
        match invocation.command {
            CommandName::CreateWebhook => {
                create_webhook::run(self, authorize(invocation)?, invocation).await
            }
            CommandName::ListWebhooks => list_webhooks::run(self, authorize(invocation)?).await,
            CommandName::ServerStats => server_stats::run(self).await,
        }
    }

    async fn defer(&self, target: &ReplyTarget, ephemeral: bool) -> Result<(), BotError> {
        with_deadline(
            self.settings.request_timeout,
            "reply deferral",
            self.platform.defer_reply(target, ephemeral),
        )
        .await
    }

    async fn send(&self, target: &ReplyTarget, reply: &Reply) -> Result<(), BotError> {
        with_deadline(
            self.settings.request_timeout,
            "reply delivery",
            self.platform.send_reply(target, reply),
        )
        .await
    }
}

/// Checks a guild-only command's context and the member's permissions.
///
/// Returns the guild id. Administrators pass every permission check.
fn authorize(invocation: &Invocation) -> Result<u64, BotError> {
    let guild_id = invocation.guild_id.ok_or(BotError::NotInGuild)?;

    if let Some((permission, permission_name)) = invocation.command.required_permission() {
        let held = invocation.author_permissions;
        if !held.administrator() && !held.contains(permission) {
            return Err(BotError::MissingPermission(permission_name));
        }
    }

    Ok(guild_id)
}
