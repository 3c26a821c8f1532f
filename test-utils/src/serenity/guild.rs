//! Test factory for creating Serenity Guild objects.

use serenity::all::{Guild, UnavailableGuild};

/// Creates a test Serenity Guild with customizable fields.
///
/// All fields other than id, name and member count are set to reasonable defaults.
/// The guild reports a join timestamp of `2020-01-01T00:00:00Z`.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `member_count` - Member count reported by the gateway
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
pub fn create_test_guild(guild_id: u64, name: &str, member_count: u64) -> Guild {
    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "owner_id": "100000000000000000",
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": member_count,
        "voice_states": [],
        "channels": [],
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}

/// Creates the partial guild delivered with a guild delete event.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `unavailable` - `true` for an outage, `false` when the bot was removed
///
/// # Panics
/// - If the JSON cannot be deserialized into an UnavailableGuild
pub fn create_test_unavailable_guild(guild_id: u64, unavailable: bool) -> UnavailableGuild {
    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "unavailable": unavailable,
    }))
    .expect("Failed to create test unavailable guild - invalid JSON structure")
}
