//! Declarative test builder.
//!
//! Configuration methods queue work which is executed in order by `build()`.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::tracker_tables, error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    include_tracker_tables: bool,
    tables: Vec<TableCreateStatement>,

    users: Vec<String>,

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    oauth_endpoints: Vec<(String, Option<String>)>, // (subject, email)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            include_tracker_tables: false,
            tables: Vec::new(),
            users: Vec::new(),
            mock_builders: Vec::new(),
            oauth_endpoints: Vec::new(),
        }
    }

    /// Create the user, army, squad, and mini tables.
    pub fn with_tracker_tables(mut self) -> Self {
        self.include_tracker_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// ```no_run
    /// use painttracker_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), painttracker_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::PainttrackerUser)
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

    /// Insert a user with the given OAuth subject. Requires the tracker tables.
    pub fn with_user(mut self, subject: impl Into<String>) -> Self {
        self.users.push(subject.into());
        self
    }

    /// Mock the OAuth token and user info endpoints, each expected to be called once.
    pub fn with_oauth_endpoints(mut self, subject: impl Into<String>, email: Option<&str>) -> Self {
        self.oauth_endpoints
            .push((subject.into(), email.map(str::to_string)));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Creates tables, inserts fixtures, then creates mock endpoints.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        let mut all_tables = Vec::new();
        if self.include_tracker_tables {
            all_tables.extend(tracker_tables());
        }
        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for subject in self.users {
            setup.user().insert_user(&subject).await?;
        }

        // Custom endpoints first so tests can stack error responses ahead of the defaults
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (subject, email) in self.oauth_endpoints {
            mocks.extend(
                setup
                    .auth()
                    .create_oauth_endpoints(&subject, email.as_deref()),
            );
        }

        setup.mocks.extend(mocks);

        Ok(setup)
    }
}
