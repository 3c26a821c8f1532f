use sea_orm::entity::prelude::*;

/// A webhook created through the bot.
///
/// `guild_id`, `channel_id` and `webhook_id` hold Discord snowflakes as strings.
/// Nothing enforces one webhook per channel; the same channel may appear any
/// number of times.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "webhook")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub channel_id: String,
    pub webhook_id: String,
    pub webhook_token: String,
    pub display_name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
