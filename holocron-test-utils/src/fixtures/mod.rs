//! Fixture helpers for inserting rows during test execution.
//!
//! - `catalog` - planets, species, people, vehicles & pilot assignments
//! - `user` - users and their favorites

pub mod catalog;
pub mod user;
