//! HTTP controllers.
//!
//! Handlers extract request data, call into the service layer and wrap results in JSON
//! responses. Every handler carries a `#[utoipa::path]` annotation collected by the router
//! into the OpenAPI document.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod species;
pub mod user;
pub mod util;
pub mod vehicle;
