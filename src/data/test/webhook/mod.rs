use crate::{data::webhook::WebhookRepository, model::webhook::StoreWebhookParam};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_guild_id;

fn store_param(guild_id: u64, channel_id: u64, webhook_id: u64) -> StoreWebhookParam {
    StoreWebhookParam {
        guild_id,
        channel_id,
        webhook_id,
        webhook_token: format!("token-{}", webhook_id),
        display_name: format!("Hook {}", webhook_id),
    }
}
