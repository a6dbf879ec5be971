//! Shared test setup for the holocron workspace.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares which tables exist, then the
//! resulting [`TestContext`] exposes fixture helpers (`test.user()`, `test.catalog()`) to insert
//! rows against an in-memory SQLite database.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{TestBuilder, TestContext, TestError};
    pub use entity::sea_orm_active_enums::FavoriteKind;
}
