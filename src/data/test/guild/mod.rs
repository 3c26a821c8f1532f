use crate::{data::guild::GuildRepository, model::guild::CreateGuildParam};
use chrono::{TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_guild_id;
mod find_by_guild_id;
mod get_all;

fn create_param(guild_id: u64, name: &str) -> CreateGuildParam {
    CreateGuildParam {
        guild_id,
        guild_name: name.to_string(),
        member_count: 25,
        joined_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
    }
}
