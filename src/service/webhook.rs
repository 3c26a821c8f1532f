use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::{
    bot::platform::DiscordPlatform,
    data::webhook::WebhookRepository,
    error::bot::BotError,
    model::webhook::{CreateWebhookParam, StoreWebhookParam, WebhookParam},
    util::deadline::with_deadline,
};

pub struct WebhookService<'a> {
    db: &'a DatabaseConnection,
    platform: &'a dyn DiscordPlatform,
    timeout: Duration,
}

impl<'a> WebhookService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        platform: &'a dyn DiscordPlatform,
        timeout: Duration,
    ) -> Self {
        Self {
            db,
            platform,
            timeout,
        }
    }

    /// Creates a webhook on Discord and records it.
    ///
    /// The Discord webhook is created first; nothing is stored if that fails. If the
    /// insert is rejected afterwards, the freshly created webhook is deleted again so
    /// no unrecorded webhook is left behind. The deletion is best effort and only
    /// logged. An insert that times out may still commit, so its webhook is kept.
    ///
    /// # Arguments
    /// - `param`: Target guild and channel plus the requested display name
    ///
    /// # Returns
    /// - `Ok(WebhookParam)`: The stored webhook, named as Discord reported it
    /// - `Err(BotError::Platform)`: Discord rejected the creation
    /// - `Err(BotError::Persistence)`: The record could not be stored
    /// - `Err(BotError::Timeout)`: Either call exceeded the deadline
    pub async fn create(&self, param: CreateWebhookParam) -> Result<WebhookParam, BotError> {
        let created = with_deadline(
            self.timeout,
            "webhook creation",
            self.platform
                .create_webhook(param.channel_id, &param.display_name),
        )
        .await?;

        tracing::debug!(
            "Created webhook {} in channel {} of guild {}",
            created.webhook_id,
            param.channel_id,
            param.guild_id
        );

        let repo = WebhookRepository::new(self.db);
        let stored = with_deadline(
            self.timeout,
            "webhook insert",
            repo.create(StoreWebhookParam {
                guild_id: param.guild_id,
                channel_id: param.channel_id,
                webhook_id: created.webhook_id,
                webhook_token: created.token.clone(),
                display_name: if created.name.is_empty() {
                    param.display_name.clone()
                } else {
                    created.name.clone()
                },
            }),
        )
        .await;

        match stored {
            Ok(webhook) => Ok(webhook),
            Err(err) if !should_compensate(&err) => {
                // The insert may still land after the deadline
                tracing::warn!(
                    "Webhook {} for guild {} is kept but may be unrecorded: {}",
                    created.webhook_id,
                    param.guild_id,
                    err
                );

                Err(err)
            }
            Err(err) => {
                tracing::error!(
                    "Failed to record webhook {} for guild {}: {}",
                    created.webhook_id,
                    param.guild_id,
                    err
                );

                match with_deadline(
                    self.timeout,
                    "webhook cleanup",
                    self.platform.delete_webhook(&created),
                )
                .await
                {
                    Ok(()) => tracing::info!(
                        "Deleted unrecorded webhook {} from channel {}",
                        created.webhook_id,
                        param.channel_id
                    ),
                    Err(cleanup_err) => tracing::warn!(
                        "Webhook {} could not be recorded or deleted: {}",
                        created.webhook_id,
                        cleanup_err
                    ),
                }

                Err(err)
            }
        }
    }

    /// Lists a guild's recorded webhooks in the order they were created.
    pub async fn list_for_guild(&self, guild_id: u64) -> Result<Vec<WebhookParam>, BotError> {
        let repo = WebhookRepository::new(self.db);

        with_deadline(self.timeout, "webhook lookup", repo.get_by_guild_id(guild_id)).await
    }
}

/// Whether a failed insert means the record definitely does not exist.
///
/// Only a database error proves that. A timed out insert may still commit, and
/// deleting its webhook would leave a record pointing at nothing.
fn should_compensate(err: &BotError) -> bool {
    matches!(err, BotError::Persistence(_))
}
