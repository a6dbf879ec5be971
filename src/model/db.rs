//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate so signatures across the data and
//! service layers stay readable.

/// A registered user. Owns favorites.
pub type UserModel = entity::user::Model;

/// A user's favorite, pointing at a catalog row by `(kind, item_id)`.
pub type FavoriteModel = entity::favorite::Model;

/// A character of the catalog, optionally linked to a species and a homeworld.
pub type PersonModel = entity::person::Model;

pub type PlanetModel = entity::planet::Model;

/// A species, optionally linked to its homeworld planet.
pub type SpeciesModel = entity::species::Model;

pub type VehicleModel = entity::vehicle::Model;

/// Row of the `pilots` association table.
pub type PilotModel = entity::pilot::Model;
