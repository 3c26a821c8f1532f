//! The Discord API calls the bot makes, behind a trait.
//!
//! Commands only talk to Discord through `DiscordPlatform`, so dispatch can be driven
//! by a recording fake in tests. `SerenityPlatform` is the real implementation and is
//! built per event from the gateway context's HTTP client.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serenity::all::{
    ChannelId, CreateInteractionResponse, CreateInteractionResponseMessage, CreateWebhook, Http,
    InteractionId, WebhookId,
};
use serenity::async_trait;

use crate::bot::command::reply::Reply;

/// A webhook as returned by Discord after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedWebhook {
    pub webhook_id: u64,
    pub token: String,
    pub name: String,
}

/// Where a command's reply is delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyTarget {
    /// Post a message into the channel the text command came from.
    Channel(u64),
    /// Respond to a slash command interaction.
    Interaction { interaction_id: u64, token: String },
}

#[async_trait]
pub trait DiscordPlatform: Send + Sync {
    /// Creates a webhook in a channel.
    async fn create_webhook(
        &self,
        channel_id: u64,
        name: &str,
    ) -> Result<CreatedWebhook, serenity::Error>;

    /// Deletes a webhook using its own token.
    async fn delete_webhook(&self, webhook: &CreatedWebhook) -> Result<(), serenity::Error>;

    /// Acknowledges an interaction so the reply may arrive later.
    ///
    /// Discord drops interactions that are not acknowledged within three seconds.
    /// Visibility is fixed here and applies to the reply sent afterwards. Channel
    /// targets need no acknowledgement.
    async fn defer_reply(&self, target: &ReplyTarget, ephemeral: bool)
        -> Result<(), serenity::Error>;

    /// Posts the reply, or fills in the deferred interaction response.
    async fn send_reply(&self, target: &ReplyTarget, reply: &Reply) -> Result<(), serenity::Error>;
}

pub struct SerenityPlatform {
    http: Arc<Http>,
}

impl SerenityPlatform {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl DiscordPlatform for SerenityPlatform {
    async fn create_webhook(
        &self,
        channel_id: u64,
        name: &str,
    ) -> Result<CreatedWebhook, serenity::Error> {
        let webhook = ChannelId::new(channel_id)
            .create_webhook(&self.http, CreateWebhook::new(name))
            .await?;

        // Channel webhooks created by a bot always carry a token
        let token = webhook
            .token
            .as_ref()
            .map(|token| token.expose_secret().to_string())
            .ok_or(serenity::Error::Other("Discord returned a webhook without a token"))?;

        Ok(CreatedWebhook {
            webhook_id: webhook.id.get(),
            token,
            name: webhook.name.unwrap_or_else(|| name.to_string()),
        })
    }

    async fn delete_webhook(&self, webhook: &CreatedWebhook) -> Result<(), serenity::Error> {
        self.http
            .delete_webhook_with_token(
                WebhookId::new(webhook.webhook_id),
                &webhook.token,
                Some("Webhook could not be recorded"),
            )
            .await
    }

    async fn defer_reply(
        &self,
        target: &ReplyTarget,
        ephemeral: bool,
    ) -> Result<(), serenity::Error> {
        let ReplyTarget::Interaction {
            interaction_id,
            token,
        } = target
        else {
            return Ok(());
        };

        self.http
            .create_interaction_response(
                InteractionId::new(*interaction_id),
                token,
                &CreateInteractionResponse::Defer(
                    CreateInteractionResponseMessage::new().ephemeral(ephemeral),
                ),
                Vec::new(),
            )
            .await
    }

    async fn send_reply(&self, target: &ReplyTarget, reply: &Reply) -> Result<(), serenity::Error> {
        match target {
            ReplyTarget::Channel(channel_id) => {
                ChannelId::new(*channel_id)
                    .send_message(&self.http, reply.to_message())
                    .await?;
            }
            ReplyTarget::Interaction { token, .. } => {
                self.http
                    .edit_original_interaction_response(
                        token,
                        &reply.to_edit_response(),
                        Vec::new(),
                    )
                    .await?;
            }
        }

        Ok(())
    }
}
