use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261016_000004_create_people_table::People,
    m20261016_000005_create_vehicles_table::Vehicles,
};

static PK_PILOTS: &str = "pk_pilots";
static IDX_PILOTS_VEHICLE_ID: &str = "idx_pilots_vehicle_id";
static FK_PILOTS_PERSON_ID: &str = "fk_pilots_person_id";
static FK_PILOTS_VEHICLE_ID: &str = "fk_pilots_vehicle_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pilots::Table)
                    .if_not_exists()
                    .col(integer(Pilots::PersonId))
                    .col(integer(Pilots::VehicleId))
                    .primary_key(
                        Index::create()
                            .name(PK_PILOTS)
                            .col(Pilots::PersonId)
                            .col(Pilots::VehicleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PILOTS_PERSON_ID)
                            .from(Pilots::Table, Pilots::PersonId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PILOTS_VEHICLE_ID)
                            .from(Pilots::Table, Pilots::VehicleId)
                            .to(Vehicles::Table, Vehicles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PILOTS_VEHICLE_ID)
                    .table(Pilots::Table)
                    .col(Pilots::VehicleId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PILOTS_VEHICLE_ID)
                    .table(Pilots::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Pilots::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Pilots {
    Table,
    PersonId,
    VehicleId,
}
