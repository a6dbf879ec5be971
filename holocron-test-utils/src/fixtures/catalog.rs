use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

/// Inserts catalog rows with only their name and relationship columns set.
pub struct CatalogFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        Ok(entity::prelude::Planet::insert(entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_species(
        &self,
        name: &str,
        homeworld_id: Option<i32>,
    ) -> Result<entity::species::Model, TestError> {
        Ok(entity::prelude::Species::insert(entity::species::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            homeworld_id: ActiveValue::Set(homeworld_id),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_person(
        &self,
        name: &str,
        species_id: Option<i32>,
        homeworld_id: Option<i32>,
    ) -> Result<entity::person::Model, TestError> {
        Ok(entity::prelude::Person::insert(entity::person::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            species_id: ActiveValue::Set(species_id),
            homeworld_id: ActiveValue::Set(homeworld_id),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_vehicle(&self, name: &str) -> Result<entity::vehicle::Model, TestError> {
        Ok(entity::prelude::Vehicle::insert(entity::vehicle::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Assigns a person as pilot of a vehicle
    pub async fn insert_pilot(
        &self,
        person_id: i32,
        vehicle_id: i32,
    ) -> Result<entity::pilot::Model, TestError> {
        Ok(entity::prelude::Pilot::insert(entity::pilot::ActiveModel {
            person_id: ActiveValue::Set(person_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
