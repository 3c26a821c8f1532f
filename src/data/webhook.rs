use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::webhook::{StoreWebhookParam, WebhookParam};

pub struct WebhookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WebhookRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a webhook record.
    ///
    /// No uniqueness is enforced: storing a second webhook for the same channel
    /// creates a second record.
    ///
    /// # Returns
    /// - `Ok(WebhookParam)`: The stored record
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, param: StoreWebhookParam) -> Result<WebhookParam, DbErr> {
        let entity = entity::webhook::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            webhook_id: ActiveValue::Set(param.webhook_id.to_string()),
            webhook_token: ActiveValue::Set(param.webhook_token),
            display_name: ActiveValue::Set(param.display_name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        WebhookParam::from_entity(entity)
    }

    /// Gets every webhook recorded for a guild in insertion order.
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild
    ///
    /// # Returns
    /// - `Ok(Vec<WebhookParam>)`: Matching records, empty if none
    /// - `Err(DbErr)`: Database error or unparseable stored id
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<WebhookParam>, DbErr> {
        entity::prelude::Webhook::find()
            .filter(entity::webhook::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::webhook::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(WebhookParam::from_entity)
            .collect()
    }
}
