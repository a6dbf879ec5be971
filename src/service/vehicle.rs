use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    data::{
        favorite::FavoriteRepository, person::PersonRepository, pilot::PilotRepository,
        vehicle::VehicleRepository,
    },
    error::{catalog::CatalogError, validation::ValidationError, Error},
    model::{
        db::VehicleModel,
        kind::{EntityKind, ItemKind, ItemRef},
        vehicle::{VehicleDto, VehicleInputDto},
    },
    service::validate,
};

pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: VehicleInputDto) -> Result<VehicleDto, Error> {
        let name = validate::required_text("name", input.name.as_deref())?;
        limit_lengths(&input)?;
        let pilot_ids = self.validate_pilots(&input).await?;

        let txn = self.db.begin().await?;

        let vehicle = VehicleRepository::new(&txn).create(name, &input).await?;
        if let Some(pilot_ids) = &pilot_ids {
            PilotRepository::new(&txn)
                .replace_for_vehicle(vehicle.id, pilot_ids)
                .await?;
        }

        txn.commit().await?;

        tracing::info!(vehicle_id = vehicle.id, "Created vehicle {}", vehicle.name);

        let pilots = PilotNames::load(self.db, &[vehicle.id]).await?;
        Ok(pilots.to_dto(vehicle))
    }

    pub async fn get(&self, vehicle_id: i32) -> Result<VehicleDto, Error> {
        let vehicle = self.find(vehicle_id).await?;

        let pilots = PilotNames::load(self.db, &[vehicle.id]).await?;
        Ok(pilots.to_dto(vehicle))
    }

    pub async fn list(&self) -> Result<Vec<VehicleDto>, Error> {
        let vehicles = VehicleRepository::new(self.db).get_all().await?;

        let vehicle_ids: Vec<i32> = vehicles.iter().map(|v| v.id).collect();
        let pilots = PilotNames::load(self.db, &vehicle_ids).await?;

        Ok(vehicles.into_iter().map(|v| pilots.to_dto(v)).collect())
    }

    /// Applies a partial update, `pilots_ids` replaces every pilot of the vehicle when present.
    pub async fn update(
        &self,
        vehicle_id: i32,
        input: VehicleInputDto,
    ) -> Result<VehicleDto, Error> {
        let vehicle = self.find(vehicle_id).await?;

        validate::reject_blank("name", input.name.as_deref())?;
        limit_lengths(&input)?;
        let pilot_ids = self.validate_pilots(&input).await?;

        let txn = self.db.begin().await?;

        let vehicle = VehicleRepository::new(&txn).update(vehicle, &input).await?;
        if let Some(pilot_ids) = &pilot_ids {
            PilotRepository::new(&txn)
                .replace_for_vehicle(vehicle.id, pilot_ids)
                .await?;
        }

        txn.commit().await?;

        let pilots = PilotNames::load(self.db, &[vehicle.id]).await?;
        Ok(pilots.to_dto(vehicle))
    }

    pub async fn delete(&self, vehicle_id: i32) -> Result<(), Error> {
        self.find(vehicle_id).await?;

        let txn = self.db.begin().await?;

        FavoriteRepository::new(&txn)
            .delete_by_item(ItemRef::new(ItemKind::Vehicle, vehicle_id))
            .await?;
        PilotRepository::new(&txn)
            .delete_by_vehicle(vehicle_id)
            .await?;
        VehicleRepository::new(&txn).delete(vehicle_id).await?;

        txn.commit().await?;

        tracing::info!(vehicle_id, "Deleted vehicle");

        Ok(())
    }

    async fn find(&self, vehicle_id: i32) -> Result<VehicleModel, Error> {
        VehicleRepository::new(self.db)
            .get(vehicle_id)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Vehicle, vehicle_id).into())
    }

    async fn validate_pilots(&self, input: &VehicleInputDto) -> Result<Option<Vec<i32>>, Error> {
        let Some(pilot_ids) = input.pilots_ids.as_deref().map(validate::unique_ids) else {
            return Ok(None);
        };

        let found = PersonRepository::new(self.db)
            .get_names(&pilot_ids)
            .await?;
        validate::ensure_resolved("pilots_ids", EntityKind::Person, &pilot_ids, &found)?;

        Ok(Some(pilot_ids))
    }
}

/// Pilot names per vehicle ID.
struct PilotNames(HashMap<i32, Vec<String>>);

impl PilotNames {
    async fn load<C: ConnectionTrait>(db: &C, vehicle_ids: &[i32]) -> Result<Self, DbErr> {
        let pilots = PilotRepository::new(db)
            .get_many_by_vehicle_ids(vehicle_ids)
            .await?;
        let person_ids: Vec<i32> = pilots.iter().map(|p| p.person_id).collect();
        let person_names = PersonRepository::new(db).get_names(&person_ids).await?;

        let mut by_vehicle: HashMap<i32, Vec<String>> = HashMap::new();
        for pilot in pilots {
            if let Some(name) = person_names.get(&pilot.person_id) {
                by_vehicle
                    .entry(pilot.vehicle_id)
                    .or_default()
                    .push(name.clone());
            }
        }

        Ok(Self(by_vehicle))
    }

    fn to_dto(&self, vehicle: VehicleModel) -> VehicleDto {
        VehicleDto {
            pilots: self.0.get(&vehicle.id).cloned().unwrap_or_default(),
            id: vehicle.id,
            name: vehicle.name,
            consumables: vehicle.consumables,
            cargo_capacity: vehicle.cargo_capacity,
            max_atmosphering_speed: vehicle.max_atmosphering_speed,
            crew: vehicle.crew,
            length: vehicle.length,
            model: vehicle.model,
            vehicle_class: vehicle.vehicle_class,
        }
    }
}

fn limit_lengths(input: &VehicleInputDto) -> Result<(), ValidationError> {
    validate::limit_lengths(&[
        ("name", input.name.as_deref()),
        ("consumables", input.consumables.as_deref()),
        ("model", input.model.as_deref()),
        ("vehicle_class", input.vehicle_class.as_deref()),
    ])
}
