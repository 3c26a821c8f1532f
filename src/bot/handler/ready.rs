//! Ready event handler.
//!
//! Fired once per gateway connection after the handshake. Registers the global
//! slash commands so their definitions always match the current settings.

use serenity::all::{Command, Context, Ready};

use crate::{bot::command::create_commands, config::BotSettings, util::deadline::with_deadline};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `settings` - Bot settings deciding which slash commands exist
/// - `ctx` - Discord context for registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(settings: &BotSettings, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord in {} guilds",
        ready.user.name,
        ready.guilds.len()
    );

    if !settings.slash_commands {
        return;
    }

    let commands = create_commands(settings);
    let count = commands.len();

    match with_deadline(
        settings.request_timeout,
        "command registration",
        Command::set_global_commands(&ctx.http, commands),
    )
    .await
    {
        Ok(_) => tracing::info!("Registered {} slash commands", count),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}
