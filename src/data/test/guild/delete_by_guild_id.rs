use super::*;

/// Tests deleting a recorded guild.
///
/// Verifies that only the matching guild is removed.
///
/// Expected: Ok(1) and the other guild untouched
#[tokio::test]
async fn deletes_matching_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("111")
        .build()
        .await?;
    let kept = factory::guild::GuildFactory::new(db)
        .guild_id("222")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let removed = repo.delete_by_guild_id(111).await?;

    assert_eq!(removed, 1);
    assert!(repo.find_by_guild_id(111).await?.is_none());
    assert_eq!(repo.find_by_guild_id(222).await?.map(|g| g.id), Some(kept.id));

    Ok(())
}

/// Tests deleting a guild with duplicate records.
///
/// Expected: Ok(2) with no record left for the guild
#[tokio::test]
async fn deletes_duplicate_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..2 {
        factory::guild::GuildFactory::new(db)
            .guild_id("111")
            .build()
            .await?;
    }

    let repo = GuildRepository::new(db);
    let removed = repo.delete_by_guild_id(111).await?;

    assert_eq!(removed, 2);
    assert_eq!(entity::prelude::Guild::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a guild that was never recorded.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let removed = repo.delete_by_guild_id(111).await?;

    assert_eq!(removed, 0);

    Ok(())
}
