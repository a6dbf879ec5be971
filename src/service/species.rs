use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    data::{
        favorite::FavoriteRepository, person::PersonRepository, planet::PlanetRepository,
        species::SpeciesRepository,
    },
    error::{catalog::CatalogError, validation::ValidationError, Error},
    model::{
        db::SpeciesModel,
        kind::{EntityKind, ItemKind, ItemRef},
        species::{SpeciesDto, SpeciesInputDto},
    },
    service::validate,
};

pub struct SpeciesService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpeciesService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a species, making the people in `members_ids` its members.
    pub async fn create(&self, input: SpeciesInputDto) -> Result<SpeciesDto, Error> {
        let name = validate::required_text("name", input.name.as_deref())?;
        limit_lengths(&input)?;
        let member_ids = self.validate_references(&input).await?;

        let txn = self.db.begin().await?;

        let species = SpeciesRepository::new(&txn).create(name, &input).await?;
        if let Some(member_ids) = &member_ids {
            PersonRepository::new(&txn)
                .replace_members(species.id, member_ids)
                .await?;
        }

        txn.commit().await?;

        tracing::info!(species_id = species.id, "Created species {}", species.name);

        let names = SpeciesNames::load(self.db, std::slice::from_ref(&species)).await?;
        Ok(names.to_dto(species))
    }

    pub async fn get(&self, species_id: i32) -> Result<SpeciesDto, Error> {
        let species = self.find(species_id).await?;

        let names = SpeciesNames::load(self.db, std::slice::from_ref(&species)).await?;
        Ok(names.to_dto(species))
    }

    pub async fn list(&self) -> Result<Vec<SpeciesDto>, Error> {
        let species = SpeciesRepository::new(self.db).get_all().await?;

        let names = SpeciesNames::load(self.db, &species).await?;
        Ok(species.into_iter().map(|s| names.to_dto(s)).collect())
    }

    pub async fn update(
        &self,
        species_id: i32,
        input: SpeciesInputDto,
    ) -> Result<SpeciesDto, Error> {
        let species = self.find(species_id).await?;

        validate::reject_blank("name", input.name.as_deref())?;
        limit_lengths(&input)?;
        let member_ids = self.validate_references(&input).await?;

        let txn = self.db.begin().await?;

        let species = SpeciesRepository::new(&txn).update(species, &input).await?;
        if let Some(member_ids) = &member_ids {
            PersonRepository::new(&txn)
                .replace_members(species.id, member_ids)
                .await?;
        }

        txn.commit().await?;

        let names = SpeciesNames::load(self.db, std::slice::from_ref(&species)).await?;
        Ok(names.to_dto(species))
    }

    /// Deletes a species, its members are kept without a species.
    pub async fn delete(&self, species_id: i32) -> Result<(), Error> {
        self.find(species_id).await?;

        let txn = self.db.begin().await?;

        FavoriteRepository::new(&txn)
            .delete_by_item(ItemRef::new(ItemKind::Species, species_id))
            .await?;
        PersonRepository::new(&txn).clear_species(species_id).await?;
        SpeciesRepository::new(&txn).delete(species_id).await?;

        txn.commit().await?;

        tracing::info!(species_id, "Deleted species");

        Ok(())
    }

    async fn find(&self, species_id: i32) -> Result<SpeciesModel, Error> {
        SpeciesRepository::new(self.db)
            .get(species_id)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Species, species_id).into())
    }

    async fn validate_references(
        &self,
        input: &SpeciesInputDto,
    ) -> Result<Option<Vec<i32>>, Error> {
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

        let member_ids = input.members_ids.as_deref().map(validate::unique_ids);
        if let Some(member_ids) = &member_ids {
            let found = PersonRepository::new(self.db)
                .get_names(member_ids)
                .await?;
            validate::ensure_resolved("members_ids", EntityKind::Person, member_ids, &found)?;
        }

        Ok(member_ids)
    }
}

struct SpeciesNames {
    planets: HashMap<i32, String>,
    members: HashMap<i32, Vec<String>>,
}

impl SpeciesNames {
    async fn load<C: ConnectionTrait>(db: &C, species: &[SpeciesModel]) -> Result<Self, DbErr> {
        let planet_ids: Vec<i32> = species.iter().filter_map(|s| s.homeworld_id).collect();
        let species_ids: Vec<i32> = species.iter().map(|s| s.id).collect();

        let planets = PlanetRepository::new(db).get_names(&planet_ids).await?;

        let mut members: HashMap<i32, Vec<String>> = HashMap::new();
        for person in PersonRepository::new(db)
            .get_many_by_species_ids(&species_ids)
            .await?
        {
            if let Some(species_id) = person.species_id {
                members.entry(species_id).or_default().push(person.name);
            }
        }

        Ok(Self { planets, members })
    }

    fn to_dto(&self, species: SpeciesModel) -> SpeciesDto {
        SpeciesDto {
            homeworld: species
                .homeworld_id
                .and_then(|id| self.planets.get(&id).cloned()),
            members: self.members.get(&species.id).cloned().unwrap_or_default(),
            id: species.id,
            name: species.name,
            classification: species.classification,
            designation: species.designation,
            eye_colors: species.eye_colors,
            skin_colors: species.skin_colors,
            hair_colors: species.hair_colors,
            language: species.language,
            average_lifespan: species.average_lifespan,
            average_height: species.average_height,
        }
    }
}

fn limit_lengths(input: &SpeciesInputDto) -> Result<(), ValidationError> {
    validate::limit_lengths(&[
        ("name", input.name.as_deref()),
        ("classification", input.classification.as_deref()),
        ("designation", input.designation.as_deref()),
        ("eye_colors", input.eye_colors.as_deref()),
        ("skin_colors", input.skin_colors.as_deref()),
        ("hair_colors", input.hair_colors.as_deref()),
        ("language", input.language.as_deref()),
    ])
}
