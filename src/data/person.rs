use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, UpdateResult,
};

use crate::model::{db::PersonModel, person::PersonInputDto};

pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    /// Creates a new instance of [`PersonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new person
    ///
    /// `species_id` & `homeworld_id` are written as provided, an ID without a matching row
    /// results in a foreign key error.
    pub async fn create(&self, name: String, input: &PersonInputDto) -> Result<PersonModel, DbErr> {
        let person = entity::person::ActiveModel {
            name: ActiveValue::Set(name),
            gender: ActiveValue::Set(input.gender.clone()),
            skin_color: ActiveValue::Set(input.skin_color.clone()),
            hair_color: ActiveValue::Set(input.hair_color.clone()),
            eye_color: ActiveValue::Set(input.eye_color.clone()),
            height: ActiveValue::Set(input.height),
            mass: ActiveValue::Set(input.mass),
            species_id: ActiveValue::Set(input.species_id),
            homeworld_id: ActiveValue::Set(input.homeworld_id),
            ..Default::default()
        };

        person.insert(self.db).await
    }

    pub async fn get(&self, person_id: i32) -> Result<Option<PersonModel>, DbErr> {
        entity::prelude::Person::find_by_id(person_id)
            .one(self.db)
            .await
    }

    /// Gets all people in insertion order
    pub async fn get_all(&self) -> Result<Vec<PersonModel>, DbErr> {
        entity::prelude::Person::find()
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all people whose homeworld is one of the provided planet IDs
    pub async fn get_many_by_homeworld_ids(
        &self,
        planet_ids: &[i32],
    ) -> Result<Vec<PersonModel>, DbErr> {
        if planet_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Person::find()
            .filter(entity::person::Column::HomeworldId.is_in(planet_ids.iter().copied()))
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all people belonging to one of the provided species IDs
    pub async fn get_many_by_species_ids(
        &self,
        species_ids: &[i32],
    ) -> Result<Vec<PersonModel>, DbErr> {
        if species_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Person::find()
            .filter(entity::person::Column::SpeciesId.is_in(species_ids.iter().copied()))
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the names of the provided person IDs in a single query
    ///
    /// IDs without a matching person are absent from the returned map.
    pub async fn get_names(&self, person_ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        if person_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let names: Vec<(i32, String)> = entity::prelude::Person::find()
            .select_only()
            .column(entity::person::Column::Id)
            .column(entity::person::Column::Name)
            .filter(entity::person::Column::Id.is_in(person_ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(names.into_iter().collect())
    }

    /// Applies the fields present in `input` to the person, leaving the rest untouched
    ///
    /// `vehicles_ids` is not a column and is ignored here, see
    /// [`PilotRepository`](crate::data::pilot::PilotRepository).
    pub async fn update(
        &self,
        person: PersonModel,
        input: &PersonInputDto,
    ) -> Result<PersonModel, DbErr> {
        let mut person_am = person.clone().into_active_model();

        if let Some(name) = &input.name {
            person_am.name = ActiveValue::Set(name.clone());
        }
        if let Some(gender) = &input.gender {
            person_am.gender = ActiveValue::Set(Some(gender.clone()));
        }
        if let Some(skin_color) = &input.skin_color {
            person_am.skin_color = ActiveValue::Set(Some(skin_color.clone()));
        }
        if let Some(hair_color) = &input.hair_color {
            person_am.hair_color = ActiveValue::Set(Some(hair_color.clone()));
        }
        if let Some(eye_color) = &input.eye_color {
            person_am.eye_color = ActiveValue::Set(Some(eye_color.clone()));
        }
        if let Some(height) = input.height {
            person_am.height = ActiveValue::Set(Some(height));
        }
        if let Some(mass) = input.mass {
            person_am.mass = ActiveValue::Set(Some(mass));
        }
        if let Some(species_id) = input.species_id {
            person_am.species_id = ActiveValue::Set(Some(species_id));
        }
        if let Some(homeworld_id) = input.homeworld_id {
            person_am.homeworld_id = ActiveValue::Set(Some(homeworld_id));
        }

        if !person_am.is_changed() {
            return Ok(person);
        }

        person_am.update(self.db).await
    }

    /// Makes `person_ids` the exact set of residents of `planet_id`
    ///
    /// Current residents not listed lose their homeworld.
    pub async fn replace_residents(&self, planet_id: i32, person_ids: &[i32]) -> Result<(), DbErr> {
        self.clear_homeworld(planet_id).await?;

        if person_ids.is_empty() {
            return Ok(());
        }

        entity::prelude::Person::update_many()
            .set(entity::person::ActiveModel {
                homeworld_id: ActiveValue::Set(Some(planet_id)),
                ..Default::default()
            })
            .filter(entity::person::Column::Id.is_in(person_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Makes `person_ids` the exact set of members of `species_id`
    ///
    /// Current members not listed lose their species.
    pub async fn replace_members(&self, species_id: i32, person_ids: &[i32]) -> Result<(), DbErr> {
        self.clear_species(species_id).await?;

        if person_ids.is_empty() {
            return Ok(());
        }

        entity::prelude::Person::update_many()
            .set(entity::person::ActiveModel {
                species_id: ActiveValue::Set(Some(species_id)),
                ..Default::default()
            })
            .filter(entity::person::Column::Id.is_in(person_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Unsets the homeworld of every person living on `planet_id`
    pub async fn clear_homeworld(&self, planet_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::Person::update_many()
            .set(entity::person::ActiveModel {
                homeworld_id: ActiveValue::Set(None),
                ..Default::default()
            })
            .filter(entity::person::Column::HomeworldId.eq(planet_id))
            .exec(self.db)
            .await
    }

    /// Unsets the species of every member of `species_id`
    pub async fn clear_species(&self, species_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::Person::update_many()
            .set(entity::person::ActiveModel {
                species_id: ActiveValue::Set(None),
                ..Default::default()
            })
            .filter(entity::person::Column::SpeciesId.eq(species_id))
            .exec(self.db)
            .await
    }

    /// Deletes a person
    ///
    /// Returns OK regardless of the person existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, person_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Person::delete_by_id(person_id)
            .exec(self.db)
            .await
    }
}
