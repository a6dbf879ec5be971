//! Data transfer objects and shared types.
//!
//! `*Dto` types are the JSON shapes returned by the API, `*InputDto` types are the request
//! bodies accepted for both create (`POST`) and patch (`PUT`) operations.

pub mod api;
pub mod app;
pub mod db;
pub mod favorite;
pub mod kind;
pub mod person;
pub mod planet;
pub mod species;
pub mod user;
pub mod vehicle;
