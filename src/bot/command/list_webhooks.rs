use super::{
    dispatch::Dispatcher,
    reply::{self, Reply},
};
use crate::{error::bot::BotError, service::webhook::WebhookService};

pub async fn run(dispatcher: &Dispatcher<'_>, guild_id: u64) -> Result<Reply, BotError> {
    let service = WebhookService::new(
        dispatcher.db,
        dispatcher.platform,
        dispatcher.settings.request_timeout,
    );
    let webhooks = service.list_for_guild(guild_id).await?;

    Ok(reply::webhook_list(&webhooks))
}
