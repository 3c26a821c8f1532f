use super::*;

/// Tests create-webhook without a name.
///
/// Expected: record stored under the default name, reply contains the name and URL
#[tokio::test]
async fn uses_default_name_when_none_given() {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let platform = FakePlatform::new();
    let settings = BotSettings::default();

    Dispatcher::new(db, &platform, &settings)
        .dispatch_message(BOT_USER_ID, &text("!create-webhook"))
        .await;

    let stored = WebhookRepository::new(db)
        .get_by_guild_id(GUILD_ID)
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].display_name, DEFAULT_WEBHOOK_NAME);
    assert_eq!(stored[0].channel_id, CHANNEL_ID);

    let replies = platform.replies();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].0, ReplyTarget::Channel(CHANNEL_ID));
    assert!(replies[0].1.text_content().contains(DEFAULT_WEBHOOK_NAME));
}

/// Tests a successful create-webhook.
///
/// Expected: reply contains https://discord.com/api/webhooks/{id}/{token}
#[tokio::test]
async fn replies_with_webhook_url() {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let platform = FakePlatform::new();
    let settings = BotSettings::default();

    Dispatcher::new(db, &platform, &settings)
        .dispatch_message(BOT_USER_ID, &text("!create-webhook Build Alerts"))
        .await;

    let created = platform.created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].name, "Build Alerts");

    let expected_url = format!(
        "https://discord.com/api/webhooks/{}/{}",
        created[0].webhook_id, created[0].token
    );
    let reply = &platform.replies()[0].1;
    assert!(reply.text_content().contains(&expected_url));
    assert!(reply.text_content().contains("Build Alerts"));
    assert!(!reply.ephemeral);
}

/// Tests create-webhook twice with identical arguments.
///
/// Expected: two distinct records
#[tokio::test]
async fn allows_duplicate_webhooks_per_channel() {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let platform = FakePlatform::new();
    let settings = BotSettings::default();
    let dispatcher = Dispatcher::new(db, &platform, &settings);

    dispatcher
        .dispatch_message(BOT_USER_ID, &text("!create-webhook Alerts"))
        .await;
    dispatcher
        .dispatch_message(BOT_USER_ID, &text("!create-webhook Alerts"))
        .await;

    let stored = WebhookRepository::new(db)
        .get_by_guild_id(GUILD_ID)
        .await
        .unwrap();
    assert_eq!(stored.len(), 2);
    assert_ne!(stored[0].id, stored[1].id);
    assert_ne!(stored[0].webhook_id, stored[1].webhook_id);
    assert_eq!(platform.replies().len(), 2);
}

/// Tests create-webhook when Discord rejects the request.
///
/// Expected: error reply and no record
#[tokio::test]
async fn reports_platform_rejection() {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let platform = FakePlatform::rejecting_creation();
    let settings = BotSettings::default();

    Dispatcher::new(db, &platform, &settings)
        .dispatch_message(BOT_USER_ID, &text("!create-webhook Alerts"))
        .await;

    let replies = platform.replies();
    assert_eq!(replies.len(), 1);
    assert_eq!(
        replies[0].1.content.as_deref(),
        Some("❌ Failed to create webhook: Missing Permissions")
    );
    assert!(WebhookRepository::new(db)
        .get_by_guild_id(GUILD_ID)
        .await
        .unwrap()
        .is_empty());
}

/// Tests create-webhook when the record cannot be stored.
///
/// Expected: the platform webhook is deleted again and an error reply is sent
#[tokio::test]
async fn removes_webhook_that_could_not_be_stored() {
    // Only the guild table exists, so the webhook insert fails
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let platform = FakePlatform::new();
    let settings = BotSettings::default();

    Dispatcher::new(db, &platform, &settings)
        .dispatch_message(BOT_USER_ID, &text("!create-webhook Alerts"))
        .await;

    assert_eq!(platform.created().len(), 1);
    assert_eq!(platform.deleted(), platform.created());

    let replies = platform.replies();
    assert_eq!(replies.len(), 1);
    assert!(replies[0]
        .1
        .text_content()
        .starts_with("❌ Failed to create webhook"));
}

/// Tests the slash command with a target channel.
///
/// Expected: webhook created in the chosen channel, reply ephemeral
#[tokio::test]
async fn slash_command_targets_chosen_channel_privately() {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let platform = FakePlatform::new();
    let settings = BotSettings::default();

    let mut invocation = slash(CommandName::CreateWebhook, Some("Deploys"));
    invocation.target_channel_id = Some(999);

    Dispatcher::new(db, &platform, &settings)
        .dispatch_invocation(BOT_USER_ID, invocation)
        .await;

    let stored = WebhookRepository::new(db)
        .get_by_guild_id(GUILD_ID)
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].channel_id, 999);
    assert_eq!(stored[0].display_name, "Deploys");

    let replies = platform.replies();
    assert_eq!(replies.len(), 1);
    assert!(matches!(replies[0].0, ReplyTarget::Interaction { .. }));
    assert!(replies[0].1.ephemeral);
}

/// Tests a configured default webhook name.
///
/// Expected: the configured name is used
#[tokio::test]
async fn uses_configured_default_name() {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let platform = FakePlatform::new();
    let settings = BotSettings {
        default_webhook_name: "Relay".to_string(),
        ..Default::default()
    };

    Dispatcher::new(db, &platform, &settings)
        .dispatch_invocation(BOT_USER_ID, slash(CommandName::CreateWebhook, None))
        .await;

    assert_eq!(platform.created()[0].name, "Relay");
}
