use std::future::Future;
use std::time::Duration;

use crate::error::bot::BotError;

/// Awaits an outbound call, giving up once `limit` has elapsed.
///
/// # Arguments
/// - `limit` - Maximum time to wait
/// - `operation` - Short name of the call, used in the timeout error and logs
/// - `future` - The Discord API or database call
///
/// # Returns
/// - `Ok(T)` - The call completed successfully in time
/// - `Err(BotError::Timeout)` - The deadline expired first
/// - `Err(BotError)` - The call failed, converted from its own error type
pub async fn with_deadline<T, E, F>(
    limit: Duration,
    operation: &'static str,
    future: F,
) -> Result<T, BotError>
where
    F: Future<Output = Result<T, E>>,
    E: Into<BotError>,
{
    match tokio::time::timeout(limit, future).await {
        Ok(result) => result.map_err(Into::into),
        Err(_) => Err(BotError::Timeout {
            operation,
            seconds: limit.as_secs(),
        }),
    }
}
