//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's gateway would deliver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, create_test_unavailable_guild};
//!
//! let guild = create_test_guild(123456789, "Test Guild", 42);
//! let left = create_test_unavailable_guild(123456789, false);
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `guild::create_test_unavailable_guild` - Create the payload of a guild delete event

pub mod guild;

pub use guild::{create_test_guild, create_test_unavailable_guild};
