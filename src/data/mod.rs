//! Database repository layer for the bot's persisted records.
//!
//! Repositories use SeaORM entity models internally and return parameter models to
//! keep the data layer separate from the service and bot layers. Each repository call
//! performs exactly one database operation.

pub mod guild;
pub mod webhook;

#[cfg(test)]
mod test;
