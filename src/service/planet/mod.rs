//! Planet service layer.
//!
//! A planet's residents and fauna are not columns of the planet: they are the people and
//! species whose `homeworld_id` points at it. Replacing them rewrites those foreign keys.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    data::{
        favorite::FavoriteRepository, person::PersonRepository, planet::PlanetRepository,
        species::SpeciesRepository,
    },
    error::{catalog::CatalogError, validation::ValidationError, Error},
    model::{
        db::PlanetModel,
        kind::{EntityKind, ItemKind, ItemRef},
        planet::{PlanetDto, PlanetInputDto},
    },
    service::validate,
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of PlanetService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a planet, moving any listed residents & species to it.
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - The created planet
    /// - `Err(Error::ValidationError)` - Name missing or blank, or a resident/species ID that
    ///   does not resolve
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, input: PlanetInputDto) -> Result<PlanetDto, Error> {
        let name = validate::required_text("name", input.name.as_deref())?;
        limit_lengths(&input)?;
        let (resident_ids, fauna_ids) = self.validate_references(&input).await?;

        let txn = self.db.begin().await?;

        let planet = PlanetRepository::new(&txn).create(name, &input).await?;
        Self::write_relations(&txn, planet.id, resident_ids, fauna_ids).await?;

        txn.commit().await?;

        tracing::info!(planet_id = planet.id, "Created planet {}", planet.name);

        let names = PlanetNames::load(self.db, &[planet.id]).await?;
        Ok(names.to_dto(planet))
    }

    pub async fn get(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let planet = self.find(planet_id).await?;

        let names = PlanetNames::load(self.db, &[planet.id]).await?;
        Ok(names.to_dto(planet))
    }

    pub async fn list(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        let planet_ids: Vec<i32> = planets.iter().map(|p| p.id).collect();
        let names = PlanetNames::load(self.db, &planet_ids).await?;

        Ok(planets.into_iter().map(|p| names.to_dto(p)).collect())
    }

    /// Applies a partial update to a planet.
    ///
    /// `residents_ids` & `fauna_ids` each replace the full set when present, an empty list
    /// clears it.
    pub async fn update(&self, planet_id: i32, input: PlanetInputDto) -> Result<PlanetDto, Error> {
        let planet = self.find(planet_id).await?;

        validate::reject_blank("name", input.name.as_deref())?;
        limit_lengths(&input)?;
        let (resident_ids, fauna_ids) = self.validate_references(&input).await?;

        let txn = self.db.begin().await?;

        let planet = PlanetRepository::new(&txn).update(planet, &input).await?;
        Self::write_relations(&txn, planet.id, resident_ids, fauna_ids).await?;

        txn.commit().await?;

        let names = PlanetNames::load(self.db, &[planet.id]).await?;
        Ok(names.to_dto(planet))
    }

    /// Deletes a planet.
    ///
    /// Its residents & native species are kept with their homeworld unset, favorites of the
    /// planet are deleted.
    pub async fn delete(&self, planet_id: i32) -> Result<(), Error> {
        self.find(planet_id).await?;

        let txn = self.db.begin().await?;

        FavoriteRepository::new(&txn)
            .delete_by_item(ItemRef::new(ItemKind::Planet, planet_id))
            .await?;
        PersonRepository::new(&txn).clear_homeworld(planet_id).await?;
        SpeciesRepository::new(&txn).clear_homeworld(planet_id).await?;
        PlanetRepository::new(&txn).delete(planet_id).await?;

        txn.commit().await?;

        tracing::info!(planet_id, "Deleted planet");

        Ok(())
    }

    async fn find(&self, planet_id: i32) -> Result<PlanetModel, Error> {
        PlanetRepository::new(self.db)
            .get(planet_id)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Planet, planet_id).into())
    }

    /// Deduplicates & resolves the relationship lists, returning them ready to write.
    async fn validate_references(
        &self,
        input: &PlanetInputDto,
    ) -> Result<(Option<Vec<i32>>, Option<Vec<i32>>), Error> {
        let resident_ids = input.residents_ids.as_deref().map(validate::unique_ids);
        if let Some(resident_ids) = &resident_ids {
            let found = PersonRepository::new(self.db)
                .get_names(resident_ids)
                .await?;
            validate::ensure_resolved("residents_ids", EntityKind::Person, resident_ids, &found)?;
        }

        let fauna_ids = input.fauna_ids.as_deref().map(validate::unique_ids);
        if let Some(fauna_ids) = &fauna_ids {
            let found = SpeciesRepository::new(self.db)
                .get_names(fauna_ids)
                .await?;
            validate::ensure_resolved("fauna_ids", EntityKind::Species, fauna_ids, &found)?;
        }

        Ok((resident_ids, fauna_ids))
    }

    async fn write_relations<C: ConnectionTrait>(
        txn: &C,
        planet_id: i32,
        resident_ids: Option<Vec<i32>>,
        fauna_ids: Option<Vec<i32>>,
    ) -> Result<(), DbErr> {
        if let Some(resident_ids) = resident_ids {
            PersonRepository::new(txn)
                .replace_residents(planet_id, &resident_ids)
                .await?;
        }
        if let Some(fauna_ids) = fauna_ids {
            SpeciesRepository::new(txn)
                .replace_fauna(planet_id, &fauna_ids)
                .await?;
        }

        Ok(())
    }
}

/// Resident & fauna names per planet ID.
struct PlanetNames {
    residents: HashMap<i32, Vec<String>>,
    fauna: HashMap<i32, Vec<String>>,
}

impl PlanetNames {
    async fn load<C: ConnectionTrait>(db: &C, planet_ids: &[i32]) -> Result<Self, DbErr> {
        let mut residents: HashMap<i32, Vec<String>> = HashMap::new();
        for person in PersonRepository::new(db)
            .get_many_by_homeworld_ids(planet_ids)
            .await?
        {
            if let Some(planet_id) = person.homeworld_id {
                residents.entry(planet_id).or_default().push(person.name);
            }
        }

        let mut fauna: HashMap<i32, Vec<String>> = HashMap::new();
        for species in SpeciesRepository::new(db)
            .get_many_by_homeworld_ids(planet_ids)
            .await?
        {
            if let Some(planet_id) = species.homeworld_id {
                fauna.entry(planet_id).or_default().push(species.name);
            }
        }

        Ok(Self { residents, fauna })
    }

    fn to_dto(&self, planet: PlanetModel) -> PlanetDto {
        PlanetDto {
            residents: self.residents.get(&planet.id).cloned().unwrap_or_default(),
            fauna: self.fauna.get(&planet.id).cloned().unwrap_or_default(),
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            surface_water: planet.surface_water,
            diameter: planet.diameter,
            gravity: planet.gravity,
            orbital_period: planet.orbital_period,
            population: planet.population,
        }
    }
}

fn limit_lengths(input: &PlanetInputDto) -> Result<(), ValidationError> {
    validate::limit_lengths(&[
        ("name", input.name.as_deref()),
        ("climate", input.climate.as_deref()),
        ("gravity", input.gravity.as_deref()),
    ])
}
