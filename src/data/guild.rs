use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::guild::{CreateGuildParam, GuildParam};

pub struct GuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a guild record without checking for an existing one.
    pub async fn create(&self, param: CreateGuildParam) -> Result<GuildParam, DbErr> {
        let entity = entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            guild_name: ActiveValue::Set(param.guild_name),
            member_count: ActiveValue::Set(i64::try_from(param.member_count).unwrap_or(i64::MAX)),
            joined_at: ActiveValue::Set(param.joined_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        GuildParam::from_entity(entity)
    }

    /// Finds the first record for a guild by its Discord guild ID
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild (u64)
    ///
    /// # Returns
    /// - `Ok(Some(GuildParam))`: Guild found in database
    /// - `Ok(None)`: Guild not recorded
    /// - `Err(DbErr)`: Database error during query
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildParam>, DbErr> {
        entity::prelude::Guild::find()
            .filter(entity::guild::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::guild::Column::Id)
            .one(self.db)
            .await?
            .map(GuildParam::from_entity)
            .transpose()
    }

    /// Deletes every record for a guild.
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of records removed, zero if none matched
    /// - `Err(DbErr)`: Database error
    pub async fn delete_by_guild_id(&self, guild_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::Guild::delete_many()
            .filter(entity::guild::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets all guild records in insertion order.
    pub async fn get_all(&self) -> Result<Vec<GuildParam>, DbErr> {
        entity::prelude::Guild::find()
            .order_by_asc(entity::guild::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(GuildParam::from_entity)
            .collect()
    }
}
