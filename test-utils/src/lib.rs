//! Hookkeeper Test Utils
//!
//! Provides shared testing utilities for the hookkeeper bot. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases, factories for the
//! persisted records, and fixtures for Serenity model objects.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Record factories with sensible defaults
//! - **serenity**: Serenity model fixtures deserialized from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Webhook;
//!
//! #[tokio::test]
//! async fn test_webhook_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Webhook)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
