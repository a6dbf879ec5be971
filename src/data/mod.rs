//! Data access layer repositories.
//!
//! One repository per table. Repositories are generic over [`sea_orm::ConnectionTrait`] so the
//! service layer can run several of them inside a single transaction.

pub mod favorite;
pub mod person;
pub mod pilot;
pub mod planet;
pub mod species;
pub mod user;
pub mod vehicle;
