//! Declarative setup for tests.
//!
//! Calls on [`TestBuilder`] queue tables and fixtures; nothing touches the
//! database until `build()`.

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for a [`TestContext`].
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_all_tables: bool,

    users: Vec<String>,
    categories: Vec<String>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_all_tables: false,
            users: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Create every application table along with the favorites uniqueness index.
    ///
    /// Tables are created parents first so foreign keys resolve.
    pub fn with_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Create a single entity table.
    ///
    /// Use this to build a partial schema, e.g. to exercise a database error path.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the given username and [`TEST_PASSWORD`](crate::constant::TEST_PASSWORD).
    pub fn with_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    /// Insert a category with the given name.
    pub fn with_category(mut self, name: impl Into<String>) -> Self {
        self.categories.push(name.into());
        self
    }

    /// Create the configured schema and insert queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready test environment
    /// - `Err(TestError)` - Table creation or a fixture insert failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut tables = Vec::new();
        let mut indexes = Vec::new();

        if self.include_all_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Category),
                schema.create_table_from_entity(entity::prelude::Animal),
                schema.create_table_from_entity(entity::prelude::Favorite),
                schema.create_table_from_entity(entity::prelude::Message),
            ]);
            indexes.push(favorites_unique_index());
        }

        tables.extend(self.tables);
        context.with_schema(tables, indexes).await?;

        for username in self.users {
            context.user().insert_user(&username).await?;
        }

        for name in self.categories {
            context.category().insert_category(&name).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn favorites_unique_index() -> IndexCreateStatement {
    Index::create()
        .name("idx-favorites-user_id-animal_id")
        .table(entity::prelude::Favorite)
        .col(entity::favorite::Column::UserId)
        .col(entity::favorite::Column::AnimalId)
        .unique()
        .to_owned()
}
