use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, UpdateResult,
};

use crate::model::{db::SpeciesModel, species::SpeciesInputDto};

pub struct SpeciesRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpeciesRepository<'a, C> {
    /// Creates a new instance of [`SpeciesRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        input: &SpeciesInputDto,
    ) -> Result<SpeciesModel, DbErr> {
        let species = entity::species::ActiveModel {
            name: ActiveValue::Set(name),
            classification: ActiveValue::Set(input.classification.clone()),
            designation: ActiveValue::Set(input.designation.clone()),
            eye_colors: ActiveValue::Set(input.eye_colors.clone()),
            skin_colors: ActiveValue::Set(input.skin_colors.clone()),
            hair_colors: ActiveValue::Set(input.hair_colors.clone()),
            language: ActiveValue::Set(input.language.clone()),
            average_lifespan: ActiveValue::Set(input.average_lifespan),
            average_height: ActiveValue::Set(input.average_height),
            homeworld_id: ActiveValue::Set(input.homeworld_id),
            ..Default::default()
        };

        species.insert(self.db).await
    }

    pub async fn get(&self, species_id: i32) -> Result<Option<SpeciesModel>, DbErr> {
        entity::prelude::Species::find_by_id(species_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<SpeciesModel>, DbErr> {
        entity::prelude::Species::find()
            .order_by_asc(entity::species::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all species native to one of the provided planet IDs
    pub async fn get_many_by_homeworld_ids(
        &self,
        planet_ids: &[i32],
    ) -> Result<Vec<SpeciesModel>, DbErr> {
        if planet_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Species::find()
            .filter(entity::species::Column::HomeworldId.is_in(planet_ids.iter().copied()))
            .order_by_asc(entity::species::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the names of the provided species IDs in a single query
    pub async fn get_names(&self, species_ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        if species_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let names: Vec<(i32, String)> = entity::prelude::Species::find()
            .select_only()
            .column(entity::species::Column::Id)
            .column(entity::species::Column::Name)
            .filter(entity::species::Column::Id.is_in(species_ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(names.into_iter().collect())
    }

    pub async fn update(
        &self,
        species: SpeciesModel,
        input: &SpeciesInputDto,
    ) -> Result<SpeciesModel, DbErr> {
        let mut species_am = species.clone().into_active_model();

        if let Some(name) = &input.name {
            species_am.name = ActiveValue::Set(name.clone());
        }
        if let Some(classification) = &input.classification {
            species_am.classification = ActiveValue::Set(Some(classification.clone()));
        }
        if let Some(designation) = &input.designation {
            species_am.designation = ActiveValue::Set(Some(designation.clone()));
        }
        if let Some(eye_colors) = &input.eye_colors {
            species_am.eye_colors = ActiveValue::Set(Some(eye_colors.clone()));
        }
        if let Some(skin_colors) = &input.skin_colors {
            species_am.skin_colors = ActiveValue::Set(Some(skin_colors.clone()));
        }
        if let Some(hair_colors) = &input.hair_colors {
            species_am.hair_colors = ActiveValue::Set(Some(hair_colors.clone()));
        }
        if let Some(language) = &input.language {
            species_am.language = ActiveValue::Set(Some(language.clone()));
        }
        if let Some(average_lifespan) = input.average_lifespan {
            species_am.average_lifespan = ActiveValue::Set(Some(average_lifespan));
        }
        if let Some(average_height) = input.average_height {
            species_am.average_height = ActiveValue::Set(Some(average_height));
        }
        if let Some(homeworld_id) = input.homeworld_id {
            species_am.homeworld_id = ActiveValue::Set(Some(homeworld_id));
        }

        if !species_am.is_changed() {
            return Ok(species);
        }

        species_am.update(self.db).await
    }

    /// Makes `species_ids` the exact set of species native to `planet_id`
    pub async fn replace_fauna(&self, planet_id: i32, species_ids: &[i32]) -> Result<(), DbErr> {
        self.clear_homeworld(planet_id).await?;

        if species_ids.is_empty() {
            return Ok(());
        }

        entity::prelude::Species::update_many()
            .set(entity::species::ActiveModel {
                homeworld_id: ActiveValue::Set(Some(planet_id)),
                ..Default::default()
            })
            .filter(entity::species::Column::Id.is_in(species_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Unsets the homeworld of every species native to `planet_id`
    pub async fn clear_homeworld(&self, planet_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::Species::update_many()
            .set(entity::species::ActiveModel {
                homeworld_id: ActiveValue::Set(None),
                ..Default::default()
            })
            .filter(entity::species::Column::HomeworldId.eq(planet_id))
            .exec(self.db)
            .await
    }

    pub async fn delete(&self, species_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Species::delete_by_id(species_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use holocron_test_utils::prelude::*;

        use crate::{data::species::SpeciesRepository, model::species::SpeciesInputDto};

        /// Expect success when creating a species native to an existing planet
        #[tokio::test]
        async fn creates_species_with_homeworld() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_catalog_tables().build().await?;
            let planet = test.catalog().insert_planet("Kashyyyk").await?;

            let species_repo = SpeciesRepository::new(&test.db);
            let input = SpeciesInputDto {
                language: Some("Shyriiwook".to_string()),
                homeworld_id: Some(planet.id),
                ..Default::default()
            };
            let species = species_repo.create("Wookie".to_string(), &input).await?;

            assert_eq!(species.name, "Wookie");
            assert_eq!(species.language.as_deref(), Some("Shyriiwook"));
            assert_eq!(species.homeworld_id, Some(planet.id));

            Ok(())
        }
    }

    mod replace_fauna {
        use holocron_test_utils::prelude::*;

        use crate::data::species::SpeciesRepository;

        /// Expect an empty list to clear the planet's native species
        #[tokio::test]
        async fn clears_fauna_for_empty_list() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_catalog_tables().build().await?;
            let planet = test.catalog().insert_planet("Kashyyyk").await?;
            test.catalog().insert_species("Wookie", Some(planet.id)).await?;

            let species_repo = SpeciesRepository::new(&test.db);
            species_repo.replace_fauna(planet.id, &[]).await?;

            let fauna = species_repo.get_many_by_homeworld_ids(&[planet.id]).await?;
            assert!(fauna.is_empty());

            Ok(())
        }

        /// Expect listed species to move to the planet
        #[tokio::test]
        async fn moves_listed_species() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_catalog_tables().build().await?;
            let tatooine = test.catalog().insert_planet("Tatooine").await?;
            let kashyyyk = test.catalog().insert_planet("Kashyyyk").await?;
            let wookie = test
                .catalog()
                .insert_species("Wookie", Some(tatooine.id))
                .await?;

            let species_repo = SpeciesRepository::new(&test.db);
            species_repo.replace_fauna(kashyyyk.id, &[wookie.id]).await?;

            let wookie = species_repo.get(wookie.id).await?.unwrap();
            assert_eq!(wookie.homeworld_id, Some(kashyyyk.id));

            Ok(())
        }
    }
}
