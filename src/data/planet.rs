use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::{db::PlanetModel, planet::PlanetInputDto};

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String, input: &PlanetInputDto) -> Result<PlanetModel, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(name),
            climate: ActiveValue::Set(input.climate.clone()),
            surface_water: ActiveValue::Set(input.surface_water),
            diameter: ActiveValue::Set(input.diameter),
            gravity: ActiveValue::Set(input.gravity.clone()),
            orbital_period: ActiveValue::Set(input.orbital_period),
            population: ActiveValue::Set(input.population),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    pub async fn get(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the names of the provided planet IDs in a single query
    ///
    /// IDs without a matching planet are absent from the returned map.
    pub async fn get_names(&self, planet_ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        if planet_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let names: Vec<(i32, String)> = entity::prelude::Planet::find()
            .select_only()
            .column(entity::planet::Column::Id)
            .column(entity::planet::Column::Name)
            .filter(entity::planet::Column::Id.is_in(planet_ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(names.into_iter().collect())
    }

    /// Applies the fields present in `input`, relationship lists are handled by the caller
    pub async fn update(
        &self,
        planet: PlanetModel,
        input: &PlanetInputDto,
    ) -> Result<PlanetModel, DbErr> {
        let mut planet_am = planet.clone().into_active_model();

        if let Some(name) = &input.name {
            planet_am.name = ActiveValue::Set(name.clone());
        }
        if let Some(climate) = &input.climate {
            planet_am.climate = ActiveValue::Set(Some(climate.clone()));
        }
        if let Some(surface_water) = input.surface_water {
            planet_am.surface_water = ActiveValue::Set(Some(surface_water));
        }
        if let Some(diameter) = input.diameter {
            planet_am.diameter = ActiveValue::Set(Some(diameter));
        }
        if let Some(gravity) = &input.gravity {
            planet_am.gravity = ActiveValue::Set(Some(gravity.clone()));
        }
        if let Some(orbital_period) = input.orbital_period {
            planet_am.orbital_period = ActiveValue::Set(Some(orbital_period));
        }
        if let Some(population) = input.population {
            planet_am.population = ActiveValue::Set(Some(population));
        }

        if !planet_am.is_changed() {
            return Ok(planet);
        }

        planet_am.update(self.db).await
    }

    /// Deletes a planet
    ///
    /// Residents & native species still pointing at the planet must be cleared first, see
    /// [`PersonRepository::clear_homeworld`](crate::data::person::PersonRepository::clear_homeworld).
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
