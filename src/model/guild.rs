//! Parameter models for guild records.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serenity::all::Guild;

use super::parse_snowflake;

/// A guild the bot has recorded as joined.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildParam {
    pub id: i32,
    pub guild_id: u64,
    pub guild_name: String,
    pub member_count: u64,
    /// When the bot joined, if Discord reported it.
    pub joined_at: Option<DateTime<Utc>>,
}

impl GuildParam {
    /// Converts an entity model to a param model at the repository boundary.
    ///
    /// Negative member counts cannot be written by the bot and are read back as zero.
    ///
    /// # Returns
    /// - `Ok(GuildParam)` - Successfully converted param model
    /// - `Err(DbErr::Custom)` - Failed to parse guild_id as u64
    pub fn from_entity(entity: entity::guild::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake("guild_id", &entity.guild_id)?,
            guild_name: entity.guild_name,
            member_count: u64::try_from(entity.member_count).unwrap_or(0),
            joined_at: entity.joined_at,
        })
    }
}

/// Parameters for recording a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateGuildParam {
    pub guild_id: u64,
    pub guild_name: String,
    pub member_count: u64,
    pub joined_at: Option<DateTime<Utc>>,
}

impl CreateGuildParam {
    /// Captures the tracked fields of a guild delivered by the gateway.
    pub fn from_guild(guild: &Guild) -> Self {
        Self {
            guild_id: guild.id.get(),
            guild_name: guild.name.clone(),
            member_count: guild.member_count,
            joined_at: Some(guild.joined_at.to_utc()),
        }
    }
}
