use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::{
    data::guild::GuildRepository,
    error::bot::BotError,
    model::guild::{CreateGuildParam, GuildParam},
    util::deadline::with_deadline,
};

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    /// Records a guild the bot has just been added to.
    ///
    /// Every join is recorded, even if a record for the guild already exists.
    pub async fn record_join(&self, param: CreateGuildParam) -> Result<GuildParam, BotError> {
        let repo = GuildRepository::new(self.db);

        with_deadline(self.timeout, "guild insert", repo.create(param)).await
    }

    /// Records a guild that became available, unless it is already recorded.
    ///
    /// Discord sends these for every guild the bot is in each time it connects.
    ///
    /// # Returns
    /// - `Ok(Some(GuildParam))`: The guild was not known and has been recorded
    /// - `Ok(None)`: A record already existed
    /// - `Err(BotError)`: Database error or timeout
    pub async fn record_available(
        &self,
        param: CreateGuildParam,
    ) -> Result<Option<GuildParam>, BotError> {
        let repo = GuildRepository::new(self.db);

        let existing = with_deadline(
            self.timeout,
            "guild lookup",
            repo.find_by_guild_id(param.guild_id),
        )
        .await?;
        if existing.is_some() {
            return Ok(None);
        }

        let guild = with_deadline(self.timeout, "guild insert", repo.create(param)).await?;

        Ok(Some(guild))
    }

    /// Removes a guild's records after the bot left it.
    ///
    /// A guild that is only unavailable due to an outage is kept.
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild
    /// - `unavailable`: Whether Discord reported the guild as unavailable
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of records removed
    /// - `Err(BotError)`: Database error or timeout
    pub async fn record_leave(&self, guild_id: u64, unavailable: bool) -> Result<u64, BotError> {
        if unavailable {
            return Ok(0);
        }

        let repo = GuildRepository::new(self.db);

        with_deadline(self.timeout, "guild delete", repo.delete_by_guild_id(guild_id)).await
    }

    /// Gets every recorded guild in insertion order.
    pub async fn get_all(&self) -> Result<Vec<GuildParam>, BotError> {
        let repo = GuildRepository::new(self.db);

        with_deadline(self.timeout, "guild lookup", repo.get_all()).await
    }
}
