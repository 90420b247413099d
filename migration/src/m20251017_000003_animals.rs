use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251017_000001_users::Users, m20251017_000002_categories::Categories};

static IDX_ANIMALS_OWNER_ID: &str = "idx-animals-owner_id";
static IDX_ANIMALS_CATEGORY_ID: &str = "idx-animals-category_id";
static FK_ANIMALS_OWNER_ID: &str = "fk-animals-owner_id";
static FK_ANIMALS_CATEGORY_ID: &str = "fk-animals-category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Animals::Table)
                    .if_not_exists()
                    .col(pk_auto(Animals::Id))
                    .col(integer(Animals::CategoryId))
                    .col(integer(Animals::OwnerId))
                    .col(string_len(Animals::Name, 100))
                    .col(integer(Animals::Age).check(Expr::col(Animals::Age).gte(0)))
                    .col(string_len_null(Animals::Gender, 20))
                    .col(string_len_null(Animals::ShortDescription, 255))
                    .col(text_null(Animals::FullDescription))
                    .col(blob_null(Animals::ImageBlob))
                    .col(timestamp(Animals::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ANIMALS_OWNER_ID)
                    .table(Animals::Table)
                    .col(Animals::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ANIMALS_CATEGORY_ID)
                    .table(Animals::Table)
                    .col(Animals::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ANIMALS_OWNER_ID)
                    .from_tbl(Animals::Table)
                    .from_col(Animals::OwnerId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ANIMALS_CATEGORY_ID)
                    .from_tbl(Animals::Table)
                    .from_col(Animals::CategoryId)
                    .to_tbl(Categories::Table)
                    .to_col(Categories::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ANIMALS_CATEGORY_ID)
                    .table(Animals::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ANIMALS_OWNER_ID)
                    .table(Animals::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ANIMALS_CATEGORY_ID)
                    .table(Animals::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ANIMALS_OWNER_ID)
                    .table(Animals::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Animals::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Animals {
    Table,
    Id,
    CategoryId,
    OwnerId,
    Name,
    Age,
    Gender,
    ShortDescription,
    FullDescription,
    ImageBlob,
    CreatedAt,
}
