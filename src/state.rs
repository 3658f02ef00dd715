use crate::{
    config::RuntimeConfiguration,
    data::{StudentStore, postgres::PgStudentStore},
    error::{MigrateSnafu, OpenDatabaseSnafu, RosterResult},
};
use snafu::ResultExt;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct RosterState {
    students: Arc<dyn StudentStore>,
}

impl RosterState {
    pub async fn new(options: PgPoolOptions, config: &RuntimeConfiguration) -> RosterResult<Self> {
        let pool = options
            .connect(&config.db_config().get_db_path())
            .await
            .context(OpenDatabaseSnafu)?;

        sqlx::migrate!().run(&pool).await.context(MigrateSnafu)?;

        Ok(Self::from_store(PgStudentStore::new(pool)))
    }

    pub fn from_store(store: impl StudentStore + 'static) -> Self {
        Self {
            students: Arc::new(store),
        }
    }

    pub fn students(&self) -> &dyn StudentStore {
        self.students.as_ref()
    }

    pub async fn sensible_shutdown(&self) {
        self.students.close().await;
    }
}
