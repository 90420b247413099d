//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! Holds an in-memory SQLite database and a session backed by a `MemoryStore`.

use std::sync::Arc;

use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test environment produced by `TestBuilder::build()`.
///
/// ```ignore
/// let test = TestBuilder::new().with_tables().build().await?;
///
/// let owner = test.user().insert_user("owner").await?;
/// let category = test.category().insert_category("Dogs").await?;
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for exercising login state
    pub session: Session,
}

impl TestContext {
    /// Convert the database connection into any type constructible from it.
    ///
    /// Lets integration tests build the server's `AppState` without this crate
    /// depending on the server crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }
}

impl TestContext {
    /// Create a context with an empty database and a fresh session.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session })
    }

    /// Execute table and index creation statements in order.
    pub(crate) async fn with_schema(
        &self,
        tables: Vec<TableCreateStatement>,
        indexes: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in tables {
            self.db.execute(&stmt).await?;
        }

        for stmt in indexes {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
