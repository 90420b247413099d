use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251017_000001_users::Users, m20251017_000003_animals::Animals};

static IDX_MESSAGES_SENDER_ID: &str = "idx-messages-sender_id";
static IDX_MESSAGES_RECIPIENT_ID: &str = "idx-messages-recipient_id";
static FK_MESSAGES_SENDER_ID: &str = "fk-messages-sender_id";
static FK_MESSAGES_RECIPIENT_ID: &str = "fk-messages-recipient_id";
static FK_MESSAGES_ANIMAL_ID: &str = "fk-messages-animal_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Messages::Table)
                    .if_not_exists()
                    .col(pk_auto(Messages::Id))
                    .col(integer(Messages::SenderId))
                    .col(integer(Messages::RecipientId))
                    .col(integer_null(Messages::AnimalId))
                    .col(string(Messages::Subject))
                    .col(text(Messages::Content))
                    .col(timestamp(Messages::CreatedAt))
                    .col(boolean(Messages::IsRead).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MESSAGES_SENDER_ID)
                    .table(Messages::Table)
                    .col(Messages::SenderId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MESSAGES_RECIPIENT_ID)
                    .table(Messages::Table)
                    .col(Messages::RecipientId)
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            (FK_MESSAGES_SENDER_ID, Messages::SenderId),
            (FK_MESSAGES_RECIPIENT_ID, Messages::RecipientId),
        ] {
            manager
                .create_foreign_key(
                    ForeignKey::create()
                        .name(name)
                        .from_tbl(Messages::Table)
                        .from_col(column)
                        .to_tbl(Users::Table)
                        .to_col(Users::Id)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MESSAGES_ANIMAL_ID)
                    .from_tbl(Messages::Table)
                    .from_col(Messages::AnimalId)
                    .to_tbl(Animals::Table)
                    .to_col(Animals::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            FK_MESSAGES_ANIMAL_ID,
            FK_MESSAGES_RECIPIENT_ID,
            FK_MESSAGES_SENDER_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(name)
                        .table(Messages::Table)
                        .to_owned(),
                )
                .await?;
        }

        for name in [IDX_MESSAGES_RECIPIENT_ID, IDX_MESSAGES_SENDER_ID] {
            manager
                .drop_index(Index::drop().name(name).table(Messages::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Messages::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Messages {
    Table,
    Id,
    SenderId,
    RecipientId,
    AnimalId,
    Subject,
    Content,
    CreatedAt,
    IsRead,
}
