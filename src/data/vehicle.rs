use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::{db::VehicleModel, vehicle::VehicleInputDto};

pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    /// Creates a new instance of [`VehicleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        input: &VehicleInputDto,
    ) -> Result<VehicleModel, DbErr> {
        let vehicle = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(name),
            consumables: ActiveValue::Set(input.consumables.clone()),
            cargo_capacity: ActiveValue::Set(input.cargo_capacity),
            max_atmosphering_speed: ActiveValue::Set(input.max_atmosphering_speed),
            crew: ActiveValue::Set(input.crew),
            length: ActiveValue::Set(input.length),
            model: ActiveValue::Set(input.model.clone()),
            vehicle_class: ActiveValue::Set(input.vehicle_class.clone()),
            ..Default::default()
        };

        vehicle.insert(self.db).await
    }

    pub async fn get(&self, vehicle_id: i32) -> Result<Option<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the names of the provided vehicle IDs in a single query
    pub async fn get_names(&self, vehicle_ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        if vehicle_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let names: Vec<(i32, String)> = entity::prelude::Vehicle::find()
            .select_only()
            .column(entity::vehicle::Column::Id)
            .column(entity::vehicle::Column::Name)
            .filter(entity::vehicle::Column::Id.is_in(vehicle_ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(names.into_iter().collect())
    }

    pub async fn update(
        &self,
        vehicle: VehicleModel,
        input: &VehicleInputDto,
    ) -> Result<VehicleModel, DbErr> {
        let mut vehicle_am = vehicle.clone().into_active_model();

        if let Some(name) = &input.name {
            vehicle_am.name = ActiveValue::Set(name.clone());
        }
        if let Some(consumables) = &input.consumables {
            vehicle_am.consumables = ActiveValue::Set(Some(consumables.clone()));
        }
        if let Some(cargo_capacity) = input.cargo_capacity {
            vehicle_am.cargo_capacity = ActiveValue::Set(Some(cargo_capacity));
        }
        if let Some(max_atmosphering_speed) = input.max_atmosphering_speed {
            vehicle_am.max_atmosphering_speed = ActiveValue::Set(Some(max_atmosphering_speed));
        }
        if let Some(crew) = input.crew {
            vehicle_am.crew = ActiveValue::Set(Some(crew));
        }
        if let Some(length) = input.length {
            vehicle_am.length = ActiveValue::Set(Some(length));
        }
        if let Some(model) = &input.model {
            vehicle_am.model = ActiveValue::Set(Some(model.clone()));
        }
        if let Some(vehicle_class) = &input.vehicle_class {
            vehicle_am.vehicle_class = ActiveValue::Set(Some(vehicle_class.clone()));
        }

        if !vehicle_am.is_changed() {
            return Ok(vehicle);
        }

        vehicle_am.update(self.db).await
    }

    pub async fn delete(&self, vehicle_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Vehicle::delete_by_id(vehicle_id)
            .exec(self.db)
            .await
    }
}
