//! Person service layer.
//!
//! People own the `species_id` & `homeworld_id` foreign keys and their pilot assignments,
//! so this is where those relationships are written from the person's side.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    data::{
        favorite::FavoriteRepository, person::PersonRepository, pilot::PilotRepository,
        planet::PlanetRepository, species::SpeciesRepository, vehicle::VehicleRepository,
    },
    error::{catalog::CatalogError, validation::ValidationError, Error},
    model::{
        db::PersonModel,
        kind::{EntityKind, ItemKind, ItemRef},
        person::{PersonDto, PersonInputDto},
    },
    service::validate,
};

/// Service for creating, reading, updating and deleting people.
pub struct PersonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonService<'a> {
    /// Creates a new instance of PersonService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a person along with its pilot assignments.
    ///
    /// # Returns
    /// - `Ok(PersonDto)` - The created person with resolved relationship names
    /// - `Err(Error::ValidationError)` - Name missing or blank, or a relationship ID that
    ///   does not resolve
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, input: PersonInputDto) -> Result<PersonDto, Error> {
        let name = validate::required_text("name", input.name.as_deref())?;
        limit_lengths(&input)?;
        let vehicle_ids = input.vehicles_ids.as_deref().map(validate::unique_ids);
        self.validate_references(&input, vehicle_ids.as_deref())
            .await?;

        let txn = self.db.begin().await?;

        let person = PersonRepository::new(&txn).create(name, &input).await?;
        if let Some(vehicle_ids) = &vehicle_ids {
            PilotRepository::new(&txn)
                .replace_for_person(person.id, vehicle_ids)
                .await?;
        }

        txn.commit().await?;

        tracing::info!(person_id = person.id, "Created person {}", person.name);

        let names = PersonNames::load(self.db, std::slice::from_ref(&person)).await?;
        Ok(names.to_dto(person))
    }

    pub async fn get(&self, person_id: i32) -> Result<PersonDto, Error> {
        let person = self.find(person_id).await?;

        let names = PersonNames::load(self.db, std::slice::from_ref(&person)).await?;
        Ok(names.to_dto(person))
    }

    /// Lists all people ordered by ID.
    pub async fn list(&self) -> Result<Vec<PersonDto>, Error> {
        let people = PersonRepository::new(self.db).get_all().await?;

        let names = PersonNames::load(self.db, &people).await?;
        Ok(people.into_iter().map(|p| names.to_dto(p)).collect())
    }

    /// Applies a partial update to a person.
    ///
    /// `vehicles_ids`, when present, replaces every pilot assignment of the person. Nothing is
    /// written unless every referenced ID resolves.
    ///
    /// # Returns
    /// - `Ok(PersonDto)` - The updated person
    /// - `Err(Error::CatalogError)` - No person with `person_id`
    /// - `Err(Error::ValidationError)` - Blank name or unresolved relationship ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(&self, person_id: i32, input: PersonInputDto) -> Result<PersonDto, Error> {
        let person = self.find(person_id).await?;

        validate::reject_blank("name", input.name.as_deref())?;
        limit_lengths(&input)?;
        let vehicle_ids = input.vehicles_ids.as_deref().map(validate::unique_ids);
        self.validate_references(&input, vehicle_ids.as_deref())
            .await?;

        let txn = self.db.begin().await?;

        let person = PersonRepository::new(&txn).update(person, &input).await?;
        if let Some(vehicle_ids) = &vehicle_ids {
            PilotRepository::new(&txn)
                .replace_for_person(person.id, vehicle_ids)
                .await?;
        }

        txn.commit().await?;

        let names = PersonNames::load(self.db, std::slice::from_ref(&person)).await?;
        Ok(names.to_dto(person))
    }

    /// Deletes a person together with its pilot assignments and every favorite of it.
    pub async fn delete(&self, person_id: i32) -> Result<(), Error> {
        self.find(person_id).await?;

        let txn = self.db.begin().await?;

        FavoriteRepository::new(&txn)
            .delete_by_item(ItemRef::new(ItemKind::Person, person_id))
            .await?;
        PilotRepository::new(&txn).delete_by_person(person_id).await?;
        PersonRepository::new(&txn).delete(person_id).await?;

        txn.commit().await?;

        tracing::info!(person_id, "Deleted person");

        Ok(())
    }

    async fn find(&self, person_id: i32) -> Result<PersonModel, Error> {
        PersonRepository::new(self.db)
            .get(person_id)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Person, person_id).into())
    }

    async fn validate_references(
        &self,
        input: &PersonInputDto,
        vehicle_ids: Option<&[i32]>,
    ) -> Result<(), Error> {
        if let Some(species_id) = input.species_id {
            let found = SpeciesRepository::new(self.db)
                .get_names(&[species_id])
                .await?;
            validate::ensure_resolved("species_id", EntityKind::Species, &[species_id], &found)?;
        }

        if let Some(homeworld_id) = input.homeworld_id {
            let found = PlanetRepository::new(self.db)
                .get_names(&[homeworld_id])
                .await?;
            validate::ensure_resolved(
                "homeworld_id",
                EntityKind::Planet,
                &[homeworld_id],
                &found,
            )?;
        }

        if let Some(vehicle_ids) = vehicle_ids {
            let found = VehicleRepository::new(self.db)
                .get_names(vehicle_ids)
                .await?;
            validate::ensure_resolved("vehicles_ids", EntityKind::Vehicle, vehicle_ids, &found)?;
        }

        Ok(())
    }
}

/// Names referenced by a batch of people, loaded with one query per relationship.
struct PersonNames {
    species: HashMap<i32, String>,
    planets: HashMap<i32, String>,
    vehicles: HashMap<i32, Vec<String>>,
}

impl PersonNames {
    async fn load<C: ConnectionTrait>(db: &C, people: &[PersonModel]) -> Result<Self, DbErr> {
        let species_ids: Vec<i32> = people.iter().filter_map(|p| p.species_id).collect();
        let planet_ids: Vec<i32> = people.iter().filter_map(|p| p.homeworld_id).collect();
        let person_ids: Vec<i32> = people.iter().map(|p| p.id).collect();

        let species = SpeciesRepository::new(db).get_names(&species_ids).await?;
        let planets = PlanetRepository::new(db).get_names(&planet_ids).await?;

        let pilots = PilotRepository::new(db)
            .get_many_by_person_ids(&person_ids)
            .await?;
        let vehicle_ids: Vec<i32> = pilots.iter().map(|p| p.vehicle_id).collect();
        let vehicle_names = VehicleRepository::new(db).get_names(&vehicle_ids).await?;

        let mut vehicles: HashMap<i32, Vec<String>> = HashMap::new();
        for pilot in pilots {
            if let Some(name) = vehicle_names.get(&pilot.vehicle_id) {
                vehicles
                    .entry(pilot.person_id)
                    .or_default()
                    .push(name.clone());
            }
        }

        Ok(Self {
            species,
            planets,
            vehicles,
        })
    }

    fn to_dto(&self, person: PersonModel) -> PersonDto {
        PersonDto {
            species: person
                .species_id
                .and_then(|id| self.species.get(&id).cloned()),
            homeworld: person
                .homeworld_id
                .and_then(|id| self.planets.get(&id).cloned()),
            vehicles: self.vehicles.get(&person.id).cloned().unwrap_or_default(),
            id: person.id,
            name: person.name,
            gender: person.gender,
            skin_color: person.skin_color,
            hair_color: person.hair_color,
            eye_color: person.eye_color,
            height: person.height,
            mass: person.mass,
        }
    }
}

fn limit_lengths(input: &PersonInputDto) -> Result<(), ValidationError> {
    validate::limit_lengths(&[
        ("name", input.name.as_deref()),
        ("gender", input.gender.as_deref()),
        ("skin_color", input.skin_color.as_deref()),
        ("hair_color", input.hair_color.as_deref()),
        ("eye_color", input.eye_color.as_deref()),
    ])
}
