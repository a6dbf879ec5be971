//! SeaORM entities for the holocron catalog.
//!
//! Tables mirror the `migration` crate: `users`, `favorites`, `people`, `planets`, `species`,
//! `vehicles` and the `pilots` association table.

pub mod prelude;

pub mod favorite;
pub mod person;
pub mod pilot;
pub mod planet;
pub mod sea_orm_active_enums;
pub mod species;
pub mod user;
pub mod vehicle;
