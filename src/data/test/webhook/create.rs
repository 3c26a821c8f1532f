use super::*;

/// Tests creating a webhook record.
///
/// Verifies that every field passed in is stored and returned, with snowflakes
/// round-tripping through their string columns.
///
/// Expected: Ok with stored webhook
#[tokio::test]
async fn creates_webhook() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Webhook)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WebhookRepository::new(db);
    let result = repo.create(store_param(111, 222, 333)).await;

    assert!(result.is_ok());
    let webhook = result.unwrap();
    assert_eq!(webhook.guild_id, 111);
    assert_eq!(webhook.channel_id, 222);
    assert_eq!(webhook.webhook_id, 333);
    assert_eq!(webhook.webhook_token, "token-333");
    assert_eq!(webhook.display_name, "Hook 333");

    let stored = entity::prelude::Webhook::find_by_id(webhook.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.guild_id, "111");
    assert_eq!(stored.webhook_id, "333");

    Ok(())
}

/// Tests creating two webhooks for the same channel.
///
/// Verifies that the repository does not deduplicate records per channel.
///
/// Expected: Ok with two distinct records
#[tokio::test]
async fn allows_duplicate_channel_webhooks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Webhook)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WebhookRepository::new(db);
    let first = repo.create(store_param(111, 222, 333)).await?;
    let second = repo.create(store_param(111, 222, 444)).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(entity::prelude::Webhook::find().count(db).await?, 2);

    Ok(())
}

/// Tests creating a webhook without the table present.
///
/// Expected: Err
#[tokio::test]
async fn fails_when_table_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WebhookRepository::new(db);
    let result = repo.create(store_param(111, 222, 333)).await;

    assert!(result.is_err());

    Ok(())
}
