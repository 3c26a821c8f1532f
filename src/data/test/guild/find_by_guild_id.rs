use super::*;

/// Tests finding a recorded guild.
///
/// Expected: Ok(Some) with the matching guild
#[tokio::test]
async fn finds_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::create_guild(db).await?;
    let created = factory::guild::GuildFactory::new(db)
        .guild_id("987654321")
        .guild_name("Wanted")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let found = repo.find_by_guild_id(987654321).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.guild_name, "Wanted");

    Ok(())
}

/// Tests finding a guild that was never recorded.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::create_guild(db).await?;

    let repo = GuildRepository::new(db);
    let found = repo.find_by_guild_id(1).await?;

    assert!(found.is_none());

    Ok(())
}
