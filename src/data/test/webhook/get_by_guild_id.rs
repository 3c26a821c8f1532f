use super::*;

/// Tests listing webhooks for a guild with several records.
///
/// Verifies that records come back in insertion order.
///
/// Expected: Ok with all three webhooks, oldest first
#[tokio::test]
async fn gets_webhooks_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Webhook)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let names = ["zeta", "alpha", "mid"];
    for name in names {
        factory::webhook::WebhookFactory::new(db, "555")
            .display_name(name)
            .build()
            .await?;
    }

    let repo = WebhookRepository::new(db);
    let webhooks = repo.get_by_guild_id(555).await?;

    let listed: Vec<&str> = webhooks.iter().map(|w| w.display_name.as_str()).collect();
    assert_eq!(listed, names);

    Ok(())
}

/// Tests that webhooks of other guilds are filtered out.
///
/// Expected: Ok with only the requested guild's webhooks
#[tokio::test]
async fn filters_by_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Webhook)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let own = factory::webhook::create_webhook(db, "555").await?;
    factory::webhook::create_webhook(db, "666").await?;
    factory::webhook::create_webhook(db, "666").await?;

    let repo = WebhookRepository::new(db);
    let webhooks = repo.get_by_guild_id(555).await?;

    assert_eq!(webhooks.len(), 1);
    assert_eq!(webhooks[0].id, own.id);
    assert_eq!(webhooks[0].webhook_token, own.webhook_token);

    Ok(())
}

/// Tests listing webhooks for a guild without any.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_webhooks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Webhook)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WebhookRepository::new(db);
    let webhooks = repo.get_by_guild_id(555).await?;

    assert!(webhooks.is_empty());

    Ok(())
}
