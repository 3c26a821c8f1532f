use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Guild, Interaction, Message, Ready, UnavailableGuild};
use serenity::async_trait;

use crate::config::BotSettings;

pub mod guild;
pub mod interaction;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub settings: BotSettings,
}

impl Handler {
    pub fn new(db: DatabaseConnection, settings: BotSettings) -> Self {
        Self { db, settings }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.settings, ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, _ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.db, &self.settings, guild, is_new).await;
    }

    /// Called when the bot is removed from a guild or the guild goes down
    async fn guild_delete(
        &self,
        _ctx: Context,
        incomplete: UnavailableGuild,
        _full: Option<Guild>,
    ) {
        guild::handle_guild_delete(&self.db, &self.settings, incomplete).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.db, &self.settings, ctx, message).await;
    }

    /// Called when a user runs a slash command
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.db, &self.settings, ctx, interaction).await;
    }
}
