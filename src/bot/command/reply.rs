//! Replies produced by commands and their Discord representations.
//!
//! Commands build a `Reply`, a plain description of the message to send, and the
//! platform turns it into a channel message or an interaction response. Keeping the
//! reply independent of serenity's builders lets command output be asserted directly.

use serenity::all::{CreateEmbed, CreateMessage, EditInteractionResponse};

use super::CommandName;
use crate::{
    error::bot::BotError,
    model::{guild::GuildParam, webhook::WebhookParam},
};

/// Embed colour for successful command output.
pub const SUCCESS_COLOUR: u32 = 0x00FF00;
pub const NO_WEBHOOKS_MESSAGE: &str = "🔍 No webhooks found for this server.";
pub const NO_SERVERS_MESSAGE: &str = "🔍 No servers found.";

/// Discord rejects embeds with more fields than this.
const MAX_EMBED_FIELDS: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    pub content: Option<String>,
    pub embed: Option<ReplyEmbed>,
    /// Only honoured for interactions, where it is fixed when the response is deferred.
    pub ephemeral: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyEmbed {
    pub title: String,
    pub description: Option<String>,
    pub colour: u32,
    pub fields: Vec<ReplyField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn embed(embed: ReplyEmbed) -> Self {
        Self {
            embed: Some(embed),
            ..Default::default()
        }
    }

    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = ephemeral;
        self
    }

    /// Every piece of user-visible text in the reply, one per line.
    #[cfg(test)]
    pub fn text_content(&self) -> String {
        let mut lines = Vec::new();

        if let Some(content) = &self.content {
            lines.push(content.clone());
        }

        if let Some(embed) = &self.embed {
            lines.push(embed.title.clone());
            lines.extend(embed.description.clone());
            for field in &embed.fields {
                lines.push(field.name.clone());
                lines.push(field.value.clone());
            }
        }

        lines.join("\n")
    }

    pub fn to_message(&self) -> CreateMessage {
        let mut message = CreateMessage::new();

        if let Some(content) = &self.content {
            message = message.content(content);
        }
        if let Some(embed) = &self.embed {
            message = message.embed(embed.to_create_embed());
        }

        message
    }

    /// Content for the deferred interaction response.
    pub fn to_edit_response(&self) -> EditInteractionResponse {
        let mut response = EditInteractionResponse::new();

        if let Some(content) = &self.content {
            response = response.content(content);
        }
        if let Some(embed) = &self.embed {
            response = response.embed(embed.to_create_embed());
        }

        response
    }
}

impl ReplyEmbed {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            colour: SUCCESS_COLOUR,
            fields: Vec::new(),
        }
    }

    /// Adds fields up to Discord's limit and notes how many were left out.
    fn with_capped_fields(mut self, fields: Vec<ReplyField>) -> Self {
        let total = fields.len();

        if total > MAX_EMBED_FIELDS {
            let note = format!("Showing the first {} of {} entries.", MAX_EMBED_FIELDS, total);
            self.description = Some(match self.description {
                Some(description) => format!("{}\n{}", description, note),
                None => note,
            });
        }

        self.fields = fields.into_iter().take(MAX_EMBED_FIELDS).collect();
        self
    }

    fn to_create_embed(&self) -> CreateEmbed {
        let mut embed = CreateEmbed::new().title(&self.title).colour(self.colour);

        if let Some(description) = &self.description {
            embed = embed.description(description);
        }
        for field in &self.fields {
            embed = embed.field(&field.name, &field.value, field.inline);
        }

        embed
    }
}

pub fn webhook_created(webhook: &WebhookParam) -> Reply {
    let mut embed = ReplyEmbed::new("Webhook Created");
    embed.description = Some(format!(
        "✅ Webhook created successfully: **{}**",
        webhook.display_name
    ));
    embed.fields.push(ReplyField {
        name: "Webhook Link".to_string(),
        value: webhook.url(),
        inline: false,
    });

    Reply::embed(embed)
}

pub fn webhook_list(webhooks: &[WebhookParam]) -> Reply {
    if webhooks.is_empty() {
        return Reply::text(NO_WEBHOOKS_MESSAGE);
    }

    let fields = webhooks
        .iter()
        .map(|webhook| ReplyField {
            name: webhook.display_name.clone(),
            value: format!("<#{}>\n[Link]({})", webhook.channel_id, webhook.url()),
            inline: false,
        })
        .collect();

    Reply::embed(ReplyEmbed::new("Webhooks List").with_capped_fields(fields))
}

pub fn server_stats(guilds: &[GuildParam]) -> Reply {
    if guilds.is_empty() {
        return Reply::text(NO_SERVERS_MESSAGE);
    }

    let fields = guilds
        .iter()
        .map(|guild| {
            let mut value = format!("ID: `{}`\nMembers: {}", guild.guild_id, guild.member_count);
            if let Some(joined_at) = guild.joined_at {
                value.push_str(&format!("\nJoined: {}", joined_at.format("%Y-%m-%d %H:%M UTC")));
            }

            ReplyField {
                name: guild.guild_name.clone(),
                value,
                inline: false,
            }
        })
        .collect();

    let mut embed = ReplyEmbed::new("Server Stats");
    embed.description = Some(format!("Present in {} servers.", guilds.len()));

    Reply::embed(embed.with_capped_fields(fields))
}

pub fn command_failed(command: CommandName, err: &BotError) -> Reply {
    Reply::text(format!("❌ {}: {}", command.failure_label(), err.user_message()))
}
