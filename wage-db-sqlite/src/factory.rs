use async_trait::async_trait;
use tracing::info;
use wage_core::db::repository::{CompensationRepository, RepositoryError};
use wage_core::db::{DEFAULT_BACKEND, DbConfig, RepositoryFactory};

use crate::repository::SqliteRepository;

/// Opens the SQLite compensation log.
///
/// ```rust,no_run
/// use wage_core::db::RepositoryRegistry;
/// use wage_db_sqlite::SqliteRepositoryFactory;
///
/// let registry = RepositoryRegistry::new().with(Box::new(SqliteRepositoryFactory));
/// ```
pub struct SqliteRepositoryFactory;

#[async_trait]
impl RepositoryFactory for SqliteRepositoryFactory {
    fn backend_name(&self) -> &'static str {
        DEFAULT_BACKEND
    }

    /// `config.connection_string` is a file path, created if missing, or
    /// `:memory:`.
    async fn open(
        &self,
        config: &DbConfig,
    ) -> Result<Box<dyn CompensationRepository>, RepositoryError> {
        let repo = SqliteRepository::new(&config.connection_string)
            .await
            .map_err(|e| RepositoryError::Connection(format!("{e:#}")))?;
        repo.run_migrations()
            .await
            .map_err(|e| RepositoryError::Database(format!("{e:#}")))?;
        info!(database = %config.connection_string, "Opened SQLite compensation log");
        Ok(Box::new(repo))
    }
}
