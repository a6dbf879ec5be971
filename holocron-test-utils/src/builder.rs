//! Declarative test builder.
//!
//! Tables are queued on the builder and created during [`TestBuilder::build`]. Tables are
//! created in the order they are requested so foreign keys always point at an existing table.

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,
    include_user_tables: bool,
    users: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            include_user_tables: false,
            users: Vec::new(),
        }
    }

    /// Add the catalog tables: planets, species, people, vehicles & pilots.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add the users & favorites tables.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Custom tables are created after the catalog & user tables.
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an active user with the provided email during `build()`.
    ///
    /// Implies [`TestBuilder::with_user_tables`].
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.include_user_tables = true;
        self.users.push(email.into());
        self
    }

    /// Create all queued tables, then insert queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);

        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Species),
                schema.create_table_from_entity(entity::prelude::Person),
                schema.create_table_from_entity(entity::prelude::Vehicle),
                schema.create_table_from_entity(entity::prelude::Pilot),
            ]);
        }

        if self.include_user_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Favorite),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        if self.include_user_tables {
            setup.with_indexes(vec![favorite_unique_index()]).await?;
        }

        for email in self.users {
            setup.user().insert_user(&email).await?;
        }

        Ok(setup)
    }
}

/// Mirrors the migration's unique index, which entity-generated tables lack.
fn favorite_unique_index() -> IndexCreateStatement {
    Index::create()
        .name("idx_favorites_user_kind_item")
        .table(entity::prelude::Favorite)
        .col(entity::favorite::Column::UserId)
        .col(entity::favorite::Column::Kind)
        .col(entity::favorite::Column::ItemId)
        .unique()
        .to_owned()
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
