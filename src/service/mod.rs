//! Service layer.
//!
//! Services validate input, coordinate repositories inside transactions and convert models
//! into the DTOs returned by the controllers.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod seed;
pub mod species;
pub mod user;
pub mod validate;
pub mod vehicle;
