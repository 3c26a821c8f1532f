//! Webhook factory for creating test webhook records.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test webhook records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::webhook::WebhookFactory;
///
/// let webhook = WebhookFactory::new(&db, "987654321")
///     .display_name("Alerts")
///     .build()
///     .await?;
/// ```
pub struct WebhookFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    channel_id: String,
    webhook_id: String,
    webhook_token: String,
    display_name: String,
}

impl<'a> WebhookFactory<'a> {
    /// Creates a new WebhookFactory for the given guild with default values.
    ///
    /// Defaults:
    /// - channel_id: `"{id}"` where id is auto-incremented
    /// - webhook_id: `"{id}"` where id is auto-incremented
    /// - webhook_token: `"token-{id}"`
    /// - display_name: `"Webhook {id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Guild the webhook belongs to
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: guild_id.into(),
            channel_id: next_id().to_string(),
            webhook_id: id.to_string(),
            webhook_token: format!("token-{}", id),
            display_name: format!("Webhook {}", id),
        }
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn webhook_id(mut self, webhook_id: impl Into<String>) -> Self {
        self.webhook_id = webhook_id.into();
        self
    }

    pub fn webhook_token(mut self, webhook_token: impl Into<String>) -> Self {
        self.webhook_token = webhook_token.into();
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Builds and inserts the webhook record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::webhook::Model)` - Created webhook record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::webhook::Model, DbErr> {
        entity::webhook::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            webhook_id: ActiveValue::Set(self.webhook_id),
            webhook_token: ActiveValue::Set(self.webhook_token),
            display_name: ActiveValue::Set(self.display_name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a webhook record with default values for the given guild.
///
/// Shorthand for `WebhookFactory::new(db, guild_id).build().await`.
pub async fn create_webhook(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::webhook::Model, DbErr> {
    WebhookFactory::new(db, guild_id).build().await
}
