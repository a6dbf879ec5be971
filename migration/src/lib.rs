pub use sea_orm_migration::prelude::*;

mod m20261016_000001_create_users_table;
mod m20261016_000002_create_planets_table;
mod m20261016_000003_create_species_table;
mod m20261016_000004_create_people_table;
mod m20261016_000005_create_vehicles_table;
mod m20261016_000006_create_pilots_table;
mod m20261016_000007_create_favorites_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_create_users_table::Migration),
            Box::new(m20261016_000002_create_planets_table::Migration),
            Box::new(m20261016_000003_create_species_table::Migration),
            Box::new(m20261016_000004_create_people_table::Migration),
            Box::new(m20261016_000005_create_vehicles_table::Migration),
            Box::new(m20261016_000006_create_pilots_table::Migration),
            Box::new(m20261016_000007_create_favorites_table::Migration),
        ]
    }
}
