use super::{
    dispatch::Dispatcher,
    parse::Invocation,
    reply::{self, Reply},
};
use crate::{
    error::bot::BotError, model::webhook::CreateWebhookParam, service::webhook::WebhookService,
};

/// Creates a webhook in the chosen channel, or the invoking one, and records it.
pub async fn run(
    dispatcher: &Dispatcher<'_>,
    guild_id: u64,
    invocation: &Invocation,
) -> Result<Reply, BotError> {
    let settings = dispatcher.settings;
    let display_name = invocation
        .name
        .clone()
        .unwrap_or_else(|| settings.default_webhook_name.clone());

    let service = WebhookService::new(
        dispatcher.db,
        dispatcher.platform,
        settings.request_timeout,
    );
    let webhook = service
        .create(CreateWebhookParam {
            guild_id,
            channel_id: invocation.target_channel_id.unwrap_or(invocation.channel_id),
            display_name,
        })
        .await?;

    tracing::info!(
        "Created webhook {} ({}) in guild {}",
        webhook.webhook_id,
        webhook.display_name,
        guild_id
    );

    Ok(reply::webhook_created(&webhook))
}
