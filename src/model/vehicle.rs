use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub consumables: Option<String>,
    pub cargo_capacity: Option<i64>,
    pub max_atmosphering_speed: Option<i32>,
    pub crew: Option<i32>,
    pub length: Option<i32>,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    /// Names of the people piloting the vehicle
    pub pilots: Vec<String>,
}

/// Body of `POST /vehicles` and `PUT /vehicles/{id}`.
///
/// `pilots_ids` replaces the vehicle's pilot assignments.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct VehicleInputDto {
    pub name: Option<String>,
    pub consumables: Option<String>,
    pub cargo_capacity: Option<i64>,
    pub max_atmosphering_speed: Option<i32>,
    pub crew: Option<i32>,
    pub length: Option<i32>,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub pilots_ids: Option<Vec<i32>>,
}
