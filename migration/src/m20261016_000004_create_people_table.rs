use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261016_000002_create_planets_table::Planets,
    m20261016_000003_create_species_table::Species,
};

static IDX_PEOPLE_SPECIES_ID: &str = "idx_people_species_id";
static IDX_PEOPLE_HOMEWORLD_ID: &str = "idx_people_homeworld_id";
static FK_PEOPLE_SPECIES_ID: &str = "fk_people_species_id";
static FK_PEOPLE_HOMEWORLD_ID: &str = "fk_people_homeworld_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(pk_auto(People::Id))
                    .col(string_len(People::Name, 120))
                    .col(string_len_null(People::Gender, 120))
                    .col(string_len_null(People::SkinColor, 120))
                    .col(string_len_null(People::HairColor, 120))
                    .col(string_len_null(People::EyeColor, 120))
                    .col(integer_null(People::Height))
                    .col(integer_null(People::Mass))
                    .col(integer_null(People::SpeciesId))
                    .col(integer_null(People::HomeworldId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PEOPLE_SPECIES_ID)
                            .from(People::Table, People::SpeciesId)
                            .to(Species::Table, Species::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PEOPLE_HOMEWORLD_ID)
                            .from(People::Table, People::HomeworldId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PEOPLE_SPECIES_ID)
                    .table(People::Table)
                    .col(People::SpeciesId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PEOPLE_HOMEWORLD_ID)
                    .table(People::Table)
                    .col(People::HomeworldId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PEOPLE_HOMEWORLD_ID)
                    .table(People::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PEOPLE_SPECIES_ID)
                    .table(People::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum People {
    Table,
    Id,
    Name,
    Gender,
    SkinColor,
    HairColor,
    EyeColor,
    Height,
    Mass,
    SpeciesId,
    HomeworldId,
}
