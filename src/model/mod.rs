//! Parameter models passed between the data, service and bot layers.
//!
//! Entity models never leave the data layer: repositories convert them into the
//! `*Param` types here, parsing string snowflakes into `u64` on the way.

pub mod guild;
pub mod webhook;

use sea_orm::DbErr;

/// Parses a Discord snowflake stored as a string column.
///
/// # Returns
/// - `Ok(u64)` - Parsed id
/// - `Err(DbErr::Custom)` - The stored value is not a valid u64
pub(crate) fn parse_snowflake(column: &str, value: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {} '{}': {}", column, value, e)))
}
