//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test records with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let webhook = factory::webhook::create_webhook(&db, "1234").await?;
//!     let guild = factory::guild::create_guild(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let webhook = factory::webhook::WebhookFactory::new(&db, "1234")
//!     .channel_id("5678")
//!     .display_name("Deploys")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `webhook` - Create webhook records
//! - `guild` - Create guild records
//! - `helpers` - Unique id generation shared by all factories

pub mod guild;
pub mod helpers;
pub mod webhook;

pub use guild::create_guild;
pub use webhook::create_webhook;
