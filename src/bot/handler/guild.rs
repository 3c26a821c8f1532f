//! Guild event handlers for tracking the guilds the bot is in.
//!
//! `guild_create` fires in several scenarios:
//! - When the bot joins a new guild (`is_new == Some(true)`)
//! - On bot startup for each guild the bot is already in
//! - When a guild becomes available again after a Discord outage
//!
//! Joins are always recorded. The other cases only record guilds that are missing,
//! so restarts do not duplicate records. `guild_delete` removes a guild's records
//! unless Discord only reports it as temporarily unavailable.

use sea_orm::DatabaseConnection;
use serenity::all::{Guild, UnavailableGuild};

use crate::{config::BotSettings, model::guild::CreateGuildParam, service::guild::GuildService};

/// Handles the guild_create event when a guild becomes available or the bot joins a new guild.
///
/// # Arguments
/// - `db` - Database connection for storing guild records
/// - `settings` - Bot settings; nothing is recorded while guild tracking is off
/// - `guild` - Guild data from Discord
/// - `is_new` - Whether this is a new guild join; None when the cache cannot tell
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    settings: &BotSettings,
    guild: Guild,
    is_new: Option<bool>,
) {
    if !settings.guild_tracking {
        return;
    }

    let param = CreateGuildParam::from_guild(&guild);
    let service = GuildService::new(db, settings.request_timeout);

    tracing::debug!(
        "Guild create event: {} ({}) - member_count: {}, is_new: {:?}",
        guild.name,
        guild.id,
        guild.member_count,
        is_new
    );

    if is_new == Some(true) {
        match service.record_join(param).await {
            Ok(_) => tracing::info!("Joined guild {} ({})", guild.name, guild.id),
            Err(e) => tracing::error!("Failed to record joined guild {}: {}", guild.id, e),
        }
        return;
    }

    match service.record_available(param).await {
        Ok(Some(_)) => tracing::info!("Recorded guild {} ({})", guild.name, guild.id),
        Ok(None) => {}
        Err(e) => tracing::error!("Failed to record guild {}: {}", guild.id, e),
    }
}

/// Handles the guild_delete event when the bot leaves a guild or it goes down.
pub async fn handle_guild_delete(
    db: &DatabaseConnection,
    settings: &BotSettings,
    incomplete: UnavailableGuild,
) {
    if !settings.guild_tracking {
        return;
    }

    if incomplete.unavailable {
        tracing::warn!("Guild {} is unavailable, keeping its records", incomplete.id);
        return;
    }

    let service = GuildService::new(db, settings.request_timeout);

    match service.record_leave(incomplete.id.get(), false).await {
        Ok(removed) => tracing::info!(
            "Left guild {} - removed {} records",
            incomplete.id,
            removed
        ),
        Err(e) => tracing::error!("Failed to remove guild {}: {}", incomplete.id, e),
    }
}
