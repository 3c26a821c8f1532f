use serenity::all::{CommandDataOption, CommandInteraction, Message, Permissions};

use super::{CommandName, CHANNEL_OPTION, NAME_OPTION};
use crate::bot::platform::ReplyTarget;

/// The parts of a gateway message the text command path looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMessage {
    pub author_id: u64,
    pub author_is_bot: bool,
    /// None for direct messages.
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    pub content: String,
    /// The author's permissions in the channel, empty when unknown.
    pub author_permissions: Permissions,
}

impl TextMessage {
    /// Reads a gateway message along with its author's resolved channel permissions.
    pub fn new(message: &Message, author_permissions: Option<Permissions>) -> Self {
        Self {
            author_id: message.author.id.get(),
            author_is_bot: message.author.bot,
            guild_id: message.guild_id.map(|id| id.get()),
            channel_id: message.channel_id.get(),
            content: message.content.clone(),
            author_permissions: author_permissions.unwrap_or_else(Permissions::empty),
        }
    }
}

/// A recognised command and its arguments, from either trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: CommandName,
    pub author_id: u64,
    pub guild_id: Option<u64>,
    pub author_permissions: Permissions,
    /// Channel the command was used in.
    pub channel_id: u64,
    /// Optional webhook name, never blank.
    pub name: Option<String>,
    /// Channel explicitly chosen for create-webhook.
    pub target_channel_id: Option<u64>,
    pub reply_to: ReplyTarget,
}

impl Invocation {
    /// Recognises a prefixed text command.
    ///
    /// Returns None for anything that is not exactly a registered command name
    /// directly following the prefix.
    pub fn from_text(prefix: &str, message: &TextMessage) -> Option<Self> {
        let (command, name) = parse_text_command(prefix, &message.content)?;

        Some(Self {
            command,
            author_id: message.author_id,
            guild_id: message.guild_id,
            author_permissions: message.author_permissions,
            channel_id: message.channel_id,
            name,
            target_channel_id: None,
            reply_to: ReplyTarget::Channel(message.channel_id),
        })
    }

    /// Recognises a slash command interaction by its exact name.
    pub fn from_interaction(interaction: &CommandInteraction) -> Option<Self> {
        let command = CommandName::from_name(&interaction.data.name)?;
        let (name, target_channel_id) = parse_options(&interaction.data.options);

        Some(Self {
            command,
            author_id: interaction.user.id.get(),
            guild_id: interaction.guild_id.map(|id| id.get()),
            // Discord resolves the member's channel permissions for interactions
            author_permissions: interaction
                .member
                .as_ref()
                .and_then(|member| member.permissions)
                .unwrap_or_else(Permissions::empty),
            channel_id: interaction.channel_id.get(),
            name,
            target_channel_id,
            reply_to: ReplyTarget::Interaction {
                interaction_id: interaction.id.get(),
                token: interaction.token.clone(),
            },
        })
    }
}

/// Splits `<prefix><command> [name...]` into the command and its trimmed name.
pub fn parse_text_command(prefix: &str, content: &str) -> Option<(CommandName, Option<String>)> {
    let rest = content.strip_prefix(prefix)?;
    if rest.starts_with(char::is_whitespace) {
        return None;
    }

    let (token, argument) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let command = CommandName::from_name(token)?;

    Some((command, non_blank(argument)))
}

/// Reads the optional name and channel arguments of a slash command.
pub fn parse_options(options: &[CommandDataOption]) -> (Option<String>, Option<u64>) {
    let mut name = None;
    let mut channel_id = None;

    for option in options {
        match option.name.as_str() {
            NAME_OPTION => name = option.value.as_str().and_then(non_blank),
            CHANNEL_OPTION => channel_id = option.value.as_channel_id().map(|id| id.get()),
            _ => {}
        }
    }

    (name, channel_id)
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
