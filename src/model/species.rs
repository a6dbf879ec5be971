use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SpeciesDto {
    pub id: i32,
    pub name: String,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub eye_colors: Option<String>,
    pub skin_colors: Option<String>,
    pub hair_colors: Option<String>,
    pub language: Option<String>,
    pub average_lifespan: Option<i32>,
    pub average_height: Option<i32>,
    /// Name of the species' homeworld planet
    pub homeworld: Option<String>,
    /// Names of the people belonging to the species
    pub members: Vec<String>,
}

/// Body of `POST /species` and `PUT /species/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SpeciesInputDto {
    pub name: Option<String>,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub eye_colors: Option<String>,
    pub skin_colors: Option<String>,
    pub hair_colors: Option<String>,
    pub language: Option<String>,
    pub average_lifespan: Option<i32>,
    pub average_height: Option<i32>,
    pub homeworld_id: Option<i32>,
    pub members_ids: Option<Vec<i32>>,
}
