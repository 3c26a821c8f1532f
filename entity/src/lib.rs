//! SeaORM entity models for the bot's persisted records.

pub mod prelude;

pub mod guild;
pub mod webhook;
