use super::*;

/// Tests recording a guild.
///
/// Expected: Ok with every field stored
#[tokio::test]
async fn creates_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let guild = repo.create(create_param(123456789, "Test Guild")).await?;

    assert_eq!(guild.guild_id, 123456789);
    assert_eq!(guild.guild_name, "Test Guild");
    assert_eq!(guild.member_count, 25);
    assert_eq!(
        guild.joined_at,
        Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    );

    Ok(())
}

/// Tests recording a guild without a join timestamp.
///
/// Expected: Ok with joined_at None
#[tokio::test]
async fn creates_guild_without_join_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut param = create_param(123456789, "Test Guild");
    param.joined_at = None;

    let repo = GuildRepository::new(db);
    let guild = repo.create(param).await?;

    assert!(guild.joined_at.is_none());

    Ok(())
}

/// Tests recording the same guild twice.
///
/// Verifies that create performs no uniqueness check.
///
/// Expected: Ok with two records
#[tokio::test]
async fn does_not_check_for_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    repo.create(create_param(123456789, "Test Guild")).await?;
    repo.create(create_param(123456789, "Test Guild")).await?;

    assert_eq!(entity::prelude::Guild::find().count(db).await?, 2);

    Ok(())
}
