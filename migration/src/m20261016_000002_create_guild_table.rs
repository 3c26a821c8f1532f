use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guild::Table)
                    .if_not_exists()
                    .col(pk_auto(Guild::Id))
                    .col(string(Guild::GuildId))
                    .col(string(Guild::GuildName))
                    .col(big_integer(Guild::MemberCount))
                    .col(timestamp_with_time_zone_null(Guild::JoinedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_guild_guild_id")
                    .table(Guild::Table)
                    .col(Guild::GuildId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Guild {
    Table,
    Id,
    GuildId,
    GuildName,
    MemberCount,
    JoinedAt,
}
