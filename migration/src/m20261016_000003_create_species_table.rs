use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261016_000002_create_planets_table::Planets;

static IDX_SPECIES_HOMEWORLD_ID: &str = "idx_species_homeworld_id";
static FK_SPECIES_HOMEWORLD_ID: &str = "fk_species_homeworld_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Species::Table)
                    .if_not_exists()
                    .col(pk_auto(Species::Id))
                    .col(string_len(Species::Name, 120))
                    .col(string_len_null(Species::Classification, 120))
                    .col(string_len_null(Species::Designation, 120))
                    .col(string_len_null(Species::EyeColors, 120))
                    .col(string_len_null(Species::SkinColors, 120))
                    .col(string_len_null(Species::HairColors, 120))
                    .col(string_len_null(Species::Language, 120))
                    .col(integer_null(Species::AverageLifespan))
                    .col(integer_null(Species::AverageHeight))
                    .col(integer_null(Species::HomeworldId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SPECIES_HOMEWORLD_ID)
                            .from(Species::Table, Species::HomeworldId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SPECIES_HOMEWORLD_ID)
                    .table(Species::Table)
                    .col(Species::HomeworldId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SPECIES_HOMEWORLD_ID)
                    .table(Species::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Species::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Species {
    Table,
    Id,
    Name,
    Classification,
    Designation,
    EyeColors,
    SkinColors,
    HairColors,
    Language,
    AverageLifespan,
    AverageHeight,
    HomeworldId,
}
