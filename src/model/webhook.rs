//! Parameter models for webhook records.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use super::parse_snowflake;

/// Base of every webhook execution URL handed out to users.
pub const WEBHOOK_URL_BASE: &str = "https://discord.com/api/webhooks";

/// Builds the URL external callers use to post through a webhook.
pub fn webhook_url(webhook_id: u64, webhook_token: &str) -> String {
    format!("{}/{}/{}", WEBHOOK_URL_BASE, webhook_id, webhook_token)
}

/// A stored webhook.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookParam {
    /// Storage id; increases with insertion order.
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: u64,
    /// Discord-assigned webhook id.
    pub webhook_id: u64,
    /// Secret token required to execute the webhook.
    pub webhook_token: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

impl WebhookParam {
    /// Converts an entity model to a param model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(WebhookParam)` - Successfully converted param model
    /// - `Err(DbErr::Custom)` - A stored snowflake could not be parsed as u64
    pub fn from_entity(entity: entity::webhook::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake("guild_id", &entity.guild_id)?,
            channel_id: parse_snowflake("channel_id", &entity.channel_id)?,
            webhook_id: parse_snowflake("webhook_id", &entity.webhook_id)?,
            webhook_token: entity.webhook_token,
            display_name: entity.display_name,
            created_at: entity.created_at,
        })
    }

    pub fn url(&self) -> String {
        webhook_url(self.webhook_id, &self.webhook_token)
    }
}

/// Request to create a webhook on Discord and record it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWebhookParam {
    pub guild_id: u64,
    /// Channel the webhook will post into.
    pub channel_id: u64,
    /// Name requested for the webhook; already defaulted if the user gave none.
    pub display_name: String,
}

/// A webhook Discord has already created, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreWebhookParam {
    pub guild_id: u64,
    pub channel_id: u64,
    pub webhook_id: u64,
    pub webhook_token: String,
    pub display_name: String,
}
