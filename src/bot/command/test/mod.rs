use super::{
    create_commands,
    dispatch::Dispatcher,
    parse::{Invocation, TextMessage},
    reply::{NO_SERVERS_MESSAGE, NO_WEBHOOKS_MESSAGE},
    CommandName,
};
use crate::{
    bot::platform::{fake::FakePlatform, ReplyTarget},
    config::{BotSettings, DEFAULT_WEBHOOK_NAME},
    data::webhook::WebhookRepository,
};
use serenity::all::Permissions;
use test_utils::{builder::TestBuilder, factory::webhook::WebhookFactory};

mod create_webhook;

const BOT_USER_ID: u64 = 1;
const USER_ID: u64 = 42;
const GUILD_ID: u64 = 111;
const CHANNEL_ID: u64 = 222;

/// A text message posted by a webhook manager in the test guild.
fn text(content: &str) -> TextMessage {
    TextMessage {
        author_id: USER_ID,
        author_is_bot: false,
        guild_id: Some(GUILD_ID),
        channel_id: CHANNEL_ID,
        content: content.to_string(),
        author_permissions: Permissions::MANAGE_WEBHOOKS,
    }
}

/// A slash command used by a webhook manager in the test guild.
fn slash(command: CommandName, name: Option<&str>) -> Invocation {
    Invocation {
        command,
        author_id: USER_ID,
        guild_id: Some(GUILD_ID),
        author_permissions: Permissions::MANAGE_WEBHOOKS,
        channel_id: CHANNEL_ID,
        name: name.map(str::to_string),
        target_channel_id: None,
        reply_to: ReplyTarget::Interaction {
            interaction_id: 777,
            token: "interaction-token".to_string(),
        },
    }
}
