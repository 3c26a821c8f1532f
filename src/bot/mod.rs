//! Discord gateway integration.
//!
//! The gateway client delivers events to `handler::Handler`, which builds a
//! `platform::SerenityPlatform` per event and hands commands to the
//! `command::dispatch::Dispatcher`.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild join, availability and removal events, slash commands
//! - `GUILD_MESSAGES` - Messages in guild channels, for text commands
//! - `DIRECT_MESSAGES` - Messages in DMs, so guild-only commands can be refused
//! - `MESSAGE_CONTENT` - Message bodies (privileged intent)
//!
//! The message intents are only requested while text commands are enabled.
//! `MESSAGE_CONTENT` must be enabled in the Discord Developer Portal.

pub mod command;
pub mod handler;
pub mod platform;
pub mod start;
