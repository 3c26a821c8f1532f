mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod util;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let result = match bot::start::init_bot(&config, db.clone()).await {
        Ok(client) => bot::start::start_bot(client).await,
        Err(e) => Err(e),
    };

    if let Err(e) = &result {
        tracing::error!("Discord bot error: {}", e);
    }

    // Close exactly once, whichever way the bot stopped
    if let Err(e) = db.close().await {
        tracing::error!("Failed to close database connection: {}", e);
    }

    tracing::info!("Shutdown complete");

    result
}
