use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A planet with its residents and native species listed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub surface_water: Option<i32>,
    pub diameter: Option<i32>,
    pub gravity: Option<String>,
    pub orbital_period: Option<i32>,
    pub population: Option<i64>,
    pub residents: Vec<String>,
    pub fauna: Vec<String>,
}

/// Body of `POST /planets` and `PUT /planets/{id}`.
///
/// `residents_ids` and `fauna_ids` replace the planet's residents and native species, an
/// empty list clears them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PlanetInputDto {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub surface_water: Option<i32>,
    pub diameter: Option<i32>,
    pub gravity: Option<String>,
    pub orbital_period: Option<i32>,
    pub population: Option<i64>,
    pub residents_ids: Option<Vec<i32>>,
    pub fauna_ids: Option<Vec<i32>>,
}
