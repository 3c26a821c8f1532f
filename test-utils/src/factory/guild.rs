//! Guild factory for creating test guild records.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild::GuildFactory;
///
/// let guild = GuildFactory::new(&db)
///     .guild_id("987654321")
///     .guild_name("CustomGuild")
///     .build()
///     .await?;
/// ```
pub struct GuildFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    guild_name: String,
    member_count: i64,
    joined_at: Option<DateTime<Utc>>,
}

impl<'a> GuildFactory<'a> {
    /// Creates a new GuildFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `"{id}"` where id is auto-incremented
    /// - guild_name: `"Guild {id}"`
    /// - member_count: `10`
    /// - joined_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
            guild_name: format!("Guild {}", id),
            member_count: 10,
            joined_at: Some(Utc::now()),
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn guild_name(mut self, guild_name: impl Into<String>) -> Self {
        self.guild_name = guild_name.into();
        self
    }

    pub fn member_count(mut self, member_count: i64) -> Self {
        self.member_count = member_count;
        self
    }

    pub fn joined_at(mut self, joined_at: Option<DateTime<Utc>>) -> Self {
        self.joined_at = joined_at;
        self
    }

    /// Builds and inserts the guild record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild::Model)` - Created guild record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild::Model, DbErr> {
        entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            guild_name: ActiveValue::Set(self.guild_name),
            member_count: ActiveValue::Set(self.member_count),
            joined_at: ActiveValue::Set(self.joined_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild record with default values.
///
/// Shorthand for `GuildFactory::new(db).build().await`.
pub async fn create_guild(db: &DatabaseConnection) -> Result<entity::guild::Model, DbErr> {
    GuildFactory::new(db).build().await
}
