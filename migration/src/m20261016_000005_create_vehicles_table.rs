use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicles::Id))
                    .col(string_len(Vehicles::Name, 120))
                    .col(string_len_null(Vehicles::Consumables, 120))
                    .col(big_integer_null(Vehicles::CargoCapacity))
                    .col(integer_null(Vehicles::MaxAtmospheringSpeed))
                    .col(integer_null(Vehicles::Crew))
                    .col(integer_null(Vehicles::Length))
                    .col(string_len_null(Vehicles::Model, 120))
                    .col(string_len_null(Vehicles::VehicleClass, 120))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicles {
    Table,
    Id,
    Name,
    Consumables,
    CargoCapacity,
    MaxAtmospheringSpeed,
    Crew,
    Length,
    Model,
    VehicleClass,
}
