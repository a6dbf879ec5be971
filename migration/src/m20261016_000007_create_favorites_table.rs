use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261016_000001_create_users_table::Users;

static IDX_FAVORITES_USER_ITEM: &str = "idx_favorites_user_kind_item";
static FK_FAVORITES_USER_ID: &str = "fk_favorites_user_id";

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
                    .col(string_len(Favorites::Kind, 16))
                    .col(integer(Favorites::ItemId))
                    .col(string_len(Favorites::Name, 120))
                    .col(timestamp(Favorites::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_USER_ID)
                            .from(Favorites::Table, Favorites::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One favorite per (user, kind, item)
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_USER_ITEM)
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::Kind)
                    .col(Favorites::ItemId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITES_USER_ITEM)
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
    Kind,
    ItemId,
    Name,
    CreatedAt,
}
