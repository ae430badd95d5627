use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection, Schema,
};
use tower_sessions::{MemoryStore, Session};

use crate::{constant, error::TestError};

/// A built test environment.
pub struct TestContext {
    /// Mock OAuth provider
    pub server: ServerGuard,
    pub db: DatabaseConnection,
    pub session: Session,
    pub mocks: Vec<Mock>,
    /// Offset in milliseconds applied to fixture timestamps so insertion order is creation order
    pub(crate) fixture_clock: i64,
}

impl TestContext {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self {
            server,
            db,
            session,
            mocks: Vec::new(),
            fixture_clock: 0,
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Creates the user, army, squad, and mini tables.
    pub async fn with_tracker_tables(&self) -> Result<(), TestError> {
        self.with_tables(tracker_tables()).await
    }

    /// URL of an endpoint on the mock OAuth provider, e.g. `url(constant::TOKEN_PATH)`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.url(), path)
    }

    pub fn auth_url(&self) -> String {
        self.url(constant::AUTH_PATH)
    }

    pub fn token_url(&self) -> String {
        self.url(constant::TOKEN_PATH)
    }

    pub fn userinfo_url(&self) -> String {
        self.url(constant::USERINFO_PATH)
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }

    pub(crate) fn next_fixture_time(&mut self) -> chrono::NaiveDateTime {
        self.fixture_clock += 1;

        chrono::Utc::now().naive_utc() + chrono::Duration::milliseconds(self.fixture_clock)
    }
}

/// Create statements for every tracker table, parents first.
pub fn tracker_tables() -> Vec<TableCreateStatement> {
    let schema = Schema::new(sea_orm::DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::PainttrackerUser),
        schema.create_table_from_entity(entity::prelude::Army),
        schema.create_table_from_entity(entity::prelude::Squad),
        schema.create_table_from_entity(entity::prelude::Mini),
    ]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestContext::new().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_tracker_tables {
    () => {{
        async {
            let setup = $crate::TestContext::new().await?;
            setup.with_tracker_tables().await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
