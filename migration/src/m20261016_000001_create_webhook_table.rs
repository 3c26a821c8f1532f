use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Webhook::Table)
                    .if_not_exists()
                    .col(pk_auto(Webhook::Id))
                    .col(string(Webhook::GuildId))
                    .col(string(Webhook::ChannelId))
                    .col(string(Webhook::WebhookId))
                    .col(string(Webhook::WebhookToken))
                    .col(string(Webhook::DisplayName))
                    .col(timestamp_with_time_zone(Webhook::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // list-webhooks always filters by guild
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_webhook_guild_id")
                    .table(Webhook::Table)
                    .col(Webhook::GuildId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Webhook::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Webhook {
    Table,
    Id,
    GuildId,
    ChannelId,
    WebhookId,
    WebhookToken,
    DisplayName,
    CreatedAt,
}
