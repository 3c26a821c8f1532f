use sea_orm::DatabaseConnection;
use serenity::all::{Context, Interaction};

use crate::{
    bot::{
        command::{dispatch::Dispatcher, parse::Invocation},
        platform::SerenityPlatform,
    },
    config::BotSettings,
};

/// Handle a slash command invocation
///
/// Other interaction kinds (buttons, autocomplete, ...) are not used by the bot.
pub async fn handle_interaction_create(
    db: &DatabaseConnection,
    settings: &BotSettings,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let Some(invocation) = Invocation::from_interaction(&command) else {
        tracing::warn!("Received unknown slash command {}", command.data.name);
        return;
    };

    let bot_user_id = ctx.cache.current_user().id.get();
    let platform = SerenityPlatform::new(ctx.http.clone());

    Dispatcher::new(db, &platform, settings)
        .dispatch_invocation(bot_user_id, invocation)
        .await;
}
