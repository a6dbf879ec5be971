use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::db::PilotModel;

/// Rows of the `pilots` table linking people to the vehicles they pilot.
pub struct PilotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PilotRepository<'a, C> {
    /// Creates a new instance of [`PilotRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the pilot assignments of the provided people, ordered by vehicle ID
    pub async fn get_many_by_person_ids(
        &self,
        person_ids: &[i32],
    ) -> Result<Vec<PilotModel>, DbErr> {
        if person_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::PersonId.is_in(person_ids.iter().copied()))
            .order_by_asc(entity::pilot::Column::VehicleId)
            .all(self.db)
            .await
    }

    /// Gets the pilot assignments of the provided vehicles, ordered by person ID
    pub async fn get_many_by_vehicle_ids(
        &self,
        vehicle_ids: &[i32],
    ) -> Result<Vec<PilotModel>, DbErr> {
        if vehicle_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::VehicleId.is_in(vehicle_ids.iter().copied()))
            .order_by_asc(entity::pilot::Column::PersonId)
            .all(self.db)
            .await
    }

    /// Replaces the vehicles piloted by a person
    ///
    /// `vehicle_ids` must be deduplicated, a repeated ID violates the composite primary key.
    pub async fn replace_for_person(
        &self,
        person_id: i32,
        vehicle_ids: &[i32],
    ) -> Result<(), DbErr> {
        self.delete_by_person(person_id).await?;

        if vehicle_ids.is_empty() {
            return Ok(());
        }

        let pilots = vehicle_ids
            .iter()
            .map(|&vehicle_id| entity::pilot::ActiveModel {
                person_id: ActiveValue::Set(person_id),
                vehicle_id: ActiveValue::Set(vehicle_id),
            });

        entity::prelude::Pilot::insert_many(pilots)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Replaces the people piloting a vehicle
    ///
    /// `person_ids` must be deduplicated.
    pub async fn replace_for_vehicle(
        &self,
        vehicle_id: i32,
        person_ids: &[i32],
    ) -> Result<(), DbErr> {
        self.delete_by_vehicle(vehicle_id).await?;

        if person_ids.is_empty() {
            return Ok(());
        }

        let pilots = person_ids
            .iter()
            .map(|&person_id| entity::pilot::ActiveModel {
                person_id: ActiveValue::Set(person_id),
                vehicle_id: ActiveValue::Set(vehicle_id),
            });

        entity::prelude::Pilot::insert_many(pilots)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete_by_person(&self, person_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Pilot::delete_many()
            .filter(entity::pilot::Column::PersonId.eq(person_id))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_vehicle(&self, vehicle_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Pilot::delete_many()
            .filter(entity::pilot::Column::VehicleId.eq(vehicle_id))
            .exec(self.db)
            .await
    }
}
