use super::{
    dispatch::Dispatcher,
    reply::{self, Reply},
};
use crate::{error::bot::BotError, service::guild::GuildService};

pub async fn run(dispatcher: &Dispatcher<'_>) -> Result<Reply, BotError> {
    let service = GuildService::new(dispatcher.db, dispatcher.settings.request_timeout);
    let guilds = service.get_all().await?;

    Ok(reply::server_stats(&guilds))
}
