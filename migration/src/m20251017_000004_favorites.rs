use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251017_000001_users::Users, m20251017_000003_animals::Animals};

static IDX_FAVORITES_USER_ID_ANIMAL_ID: &str = "idx-favorites-user_id-animal_id";
static IDX_FAVORITES_ANIMAL_ID: &str = "idx-favorites-animal_id";
static FK_FAVORITES_USER_ID: &str = "fk-favorites-user_id";
static FK_FAVORITES_ANIMAL_ID: &str = "fk-favorites-animal_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(integer(Favorites::UserId))
                    .col(integer(Favorites::AnimalId))
                    .col(timestamp(Favorites::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Authoritative guard against duplicate favorites under concurrent inserts
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_USER_ID_ANIMAL_ID)
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::AnimalId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_ANIMAL_ID)
                    .table(Favorites::Table)
                    .col(Favorites::AnimalId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITES_USER_ID)
                    .from_tbl(Favorites::Table)
                    .from_col(Favorites::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITES_ANIMAL_ID)
                    .from_tbl(Favorites::Table)
                    .from_col(Favorites::AnimalId)
                    .to_tbl(Animals::Table)
                    .to_col(Animals::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITES_ANIMAL_ID)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITES_USER_ID)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITES_ANIMAL_ID)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITES_USER_ID_ANIMAL_ID)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    AnimalId,
    CreatedAt,
}
