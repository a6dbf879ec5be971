//! Holocron: a REST catalog of Star Wars people, planets, species and vehicles.
//!
//! The crate is layered the usual way: `controller` (axum handlers) calls `service` (validation,
//! patch semantics, cascades and name-resolved serialization) which calls `data` (SeaORM
//! repositories over the `entity` crate). `startup` wires configuration, the database and the
//! router together.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
