use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};

use crate::{
    bot::{
        command::{dispatch::Dispatcher, parse::TextMessage},
        platform::SerenityPlatform,
    },
    config::BotSettings,
};

/// Handle message creation in a channel
pub async fn handle_message(
    db: &DatabaseConnection,
    settings: &BotSettings,
    ctx: Context,
    message: Message,
) {
    // Cheap exit for the bulk of traffic
    if !message.content.starts_with(settings.command_prefix.as_str()) {
        return;
    }

    let bot_user_id = ctx.cache.current_user().id.get();
    let platform = SerenityPlatform::new(ctx.http.clone());

    // Needs the guild and its roles cached; unknown permissions deny webhook commands
    let permissions = message.author_permissions(&ctx.cache);
    let text = TextMessage::new(&message, permissions);

    Dispatcher::new(db, &platform, settings)
        .dispatch_message(bot_user_id, &text)
        .await;
}
