use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A person with relationships resolved to names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub name: String,
    pub gender: Option<String>,
    pub skin_color: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    /// Name of the person's species
    pub species: Option<String>,
    /// Name of the person's homeworld planet
    pub homeworld: Option<String>,
    /// Names of the vehicles the person pilots
    pub vehicles: Vec<String>,
}

/// Body of `POST /people` and `PUT /people/{id}`.
///
/// `name` is required on create. On update, absent or `null` fields are left unchanged and
/// `vehicles_ids` replaces the person's pilot assignments.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PersonInputDto {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub skin_color: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub species_id: Option<i32>,
    pub homeworld_id: Option<i32>,
    pub vehicles_ids: Option<Vec<i32>>,
}
