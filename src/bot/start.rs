use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::handler::Handler,
    config::{BotSettings, Config},
    error::AppError,
    startup,
};

/// Gateway intents needed for the enabled features.
pub fn gateway_intents(settings: &BotSettings) -> GatewayIntents {
    let mut intents = GatewayIntents::GUILDS;

    if settings.text_commands {
        intents |= GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT;
    }

    intents
}

/// Builds the Discord client without connecting it.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and settings
/// - `db` - Database connection shared by all event handlers
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - The client could not be built
pub async fn init_bot(config: &Config, db: DatabaseConnection) -> Result<Client, AppError> {
    let intents = gateway_intents(&config.bot);
    let handler = Handler::new(db, config.bot.clone());

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Runs the gateway client until it stops or a shutdown signal arrives.
///
/// On SIGINT or SIGTERM all shards are shut down, which makes `Client::start`
/// return normally.
///
/// # Returns
/// - `Ok(())` - The client was shut down
/// - `Err(AppError)` - The gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        if let Err(e) = startup::wait_for_shutdown_signal().await {
            tracing::error!("Failed to listen for shutdown signals: {}", e);
            return;
        }

        tracing::info!("Shutdown signal received, disconnecting from Discord");
        shard_manager.shutdown_all().await;
    });

    tracing::info!("Starting Discord bot");

    client.start().await?;

    Ok(())
}
