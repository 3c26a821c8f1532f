use super::*;

/// Tests getting all guilds when multiple guilds exist.
///
/// Verifies that every record is returned in insertion order.
///
/// Expected: Ok with all guilds returned
#[tokio::test]
async fn gets_all_guilds_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::guild::create_guild(db).await?;
    let second = factory::guild::create_guild(db).await?;
    let third = factory::guild::create_guild(db).await?;

    let repo = GuildRepository::new(db);
    let guilds = repo.get_all().await?;

    let ids: Vec<i32> = guilds.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests getting all guilds when no guilds exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let guilds = repo.get_all().await?;

    assert!(guilds.is_empty());

    Ok(())
}

/// Tests getting guilds with special characters in names.
///
/// Expected: Ok with names preserved
#[tokio::test]
async fn gets_guilds_with_special_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_name("Guild 🎮 with émojis & spëcial ⭐ chars!")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let guilds = repo.get_all().await?;

    assert_eq!(guilds.len(), 1);
    assert_eq!(guilds[0].guild_name, "Guild 🎮 with émojis & spëcial ⭐ chars!");

    Ok(())
}
