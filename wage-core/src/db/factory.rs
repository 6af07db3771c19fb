//! Choosing where the compensation log lives.
//!
//! The binary registers every backend it was built with, and the user's
//! `--backend`/`--db` flags become a [`DbConfig`] that picks one of them.

use async_trait::async_trait;
use tracing::debug;

use super::repository::{CompensationRepository, RepositoryError};

/// Backend used when none is named.
pub const DEFAULT_BACKEND: &str = "sqlite";

/// Log file used when no location is given.
pub const DEFAULT_DATABASE: &str = "compensation_data.db";

/// Which backend holds the log, and where.
///
/// | backend  | connection_string                   |
/// |----------|-------------------------------------|
/// | `sqlite` | `compensation_data.db`, `:memory:`  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Always lowercase, so `--backend SQLite` finds the `sqlite` backend.
    pub backend: String,
    pub connection_string: String,
}

impl DbConfig {
    /// A blank location falls back to [`DEFAULT_DATABASE`].
    pub fn new(backend: impl Into<String>, connection_string: impl Into<String>) -> Self {
        let backend = backend.into().trim().to_ascii_lowercase();
        let connection_string = connection_string.into();
        let connection_string = if connection_string.trim().is_empty() {
            DEFAULT_DATABASE.to_string()
        } else {
            connection_string
        };
        Self {
            backend,
            connection_string,
        }
    }

    /// A SQLite log at `path`.
    pub fn sqlite(path: impl Into<String>) -> Self {
        Self::new(DEFAULT_BACKEND, path)
    }

    /// A throwaway SQLite log that disappears with the process.
    pub fn in_memory() -> Self {
        Self::sqlite(":memory:")
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::sqlite(DEFAULT_DATABASE)
    }
}

/// Opens one kind of compensation log.
#[async_trait]
pub trait RepositoryFactory: Send + Sync {
    /// Lowercase name matched against [`DbConfig::backend`].
    fn backend_name(&self) -> &'static str;

    /// Open the log at `config.connection_string`, creating and migrating
    /// it if needed.
    async fn open(
        &self,
        config: &DbConfig,
    ) -> Result<Box<dyn CompensationRepository>, RepositoryError>;
}

/// The log backends compiled into a binary, in registration order.
#[derive(Default)]
pub struct RepositoryRegistry {
    backends: Vec<Box<dyn RepositoryFactory>>,
}

impl RepositoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a backend. A later backend with the same name replaces the earlier one.
    pub fn with(mut self, factory: Box<dyn RepositoryFactory>) -> Self {
        self.backends
            .retain(|known| known.backend_name() != factory.backend_name());
        self.backends.push(factory);
        self
    }

    pub fn backend_names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|f| f.backend_name()).collect()
    }

    /// Open the log `config` points at.
    ///
    /// # Errors
    /// [`RepositoryError::Configuration`] when no built-in backend has the
    /// requested name, otherwise whatever the backend reports.
    pub async fn open(
        &self,
        config: &DbConfig,
    ) -> Result<Box<dyn CompensationRepository>, RepositoryError> {
        let Some(factory) = self
            .backends
            .iter()
            .find(|f| f.backend_name() == config.backend)
        else {
            return Err(RepositoryError::Configuration(format!(
                "no '{}' compensation log backend is built in (have: {})",
                config.backend,
                self.backend_names().join(", ")
            )));
        };

        debug!(
            backend = factory.backend_name(),
            location = %config.connection_string,
            "opening compensation log"
        );
        factory.open(config).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use crate::models::{
        CompensationProfile, CompensationRecord, MonthlySnapshot, NewSnapshot, RecordTerms,
    };

    use super::*;

    /// A log with nothing in it and no way to write.
    struct EmptyLog;

    #[async_trait]
    impl CompensationRepository for EmptyLog {
        async fn create_record(
            &self,
            _profile: &CompensationProfile,
            _snapshot: &NewSnapshot,
        ) -> Result<CompensationRecord, RepositoryError> {
            Err(RepositoryError::NotFound)
        }
        async fn get_record(&self, _id: i64) -> Result<CompensationRecord, RepositoryError> {
            Err(RepositoryError::NotFound)
        }
        async fn list_records(&self) -> Result<Vec<CompensationRecord>, RepositoryError> {
            Ok(Vec::new())
        }
        async fn update_record(
            &self,
            _id: i64,
            _terms: &RecordTerms,
            _snapshot: &NewSnapshot,
        ) -> Result<CompensationRecord, RepositoryError> {
            Err(RepositoryError::NotFound)
        }
        async fn list_snapshots(
            &self,
            _record_id: Option<i64>,
        ) -> Result<Vec<MonthlySnapshot>, RepositoryError> {
            Ok(Vec::new())
        }
    }

    /// Remembers every location it was asked to open.
    struct RecordingBackend {
        name: &'static str,
        opened: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl RepositoryFactory for RecordingBackend {
        fn backend_name(&self) -> &'static str {
            self.name
        }
        async fn open(
            &self,
            config: &DbConfig,
        ) -> Result<Box<dyn CompensationRepository>, RepositoryError> {
            self.opened
                .lock()
                .unwrap()
                .push(config.connection_string.clone());
            Ok(Box::new(EmptyLog))
        }
    }

    struct LockedFileBackend;

    #[async_trait]
    impl RepositoryFactory for LockedFileBackend {
        fn backend_name(&self) -> &'static str {
            "sqlite"
        }
        async fn open(
            &self,
            config: &DbConfig,
        ) -> Result<Box<dyn CompensationRepository>, RepositoryError> {
            Err(RepositoryError::Connection(format!(
                "{} is locked",
                config.connection_string
            )))
        }
    }

    fn recording(name: &'static str) -> (Box<dyn RepositoryFactory>, Arc<Mutex<Vec<String>>>) {
        let opened = Arc::new(Mutex::new(Vec::new()));
        let backend = RecordingBackend {
            name,
            opened: Arc::clone(&opened),
        };
        (Box::new(backend), opened)
    }

    #[test]
    fn default_config_is_the_sqlite_data_file() {
        assert_eq!(
            DbConfig::default(),
            DbConfig {
                backend: "sqlite".to_string(),
                connection_string: "compensation_data.db".to_string(),
            }
        );
        assert_eq!(DbConfig::in_memory().connection_string, ":memory:");
    }

    #[test]
    fn config_lowercases_backend_and_fills_blank_location() {
        let config = DbConfig::new(" SQLite ", "  ");

        assert_eq!(config, DbConfig::default());
    }

    #[tokio::test]
    async fn open_hands_the_location_to_the_named_backend() {
        let (sqlite, sqlite_opened) = recording("sqlite");
        let (archive, archive_opened) = recording("archive");
        let registry = RepositoryRegistry::new().with(sqlite).with(archive);

        let log = registry
            .open(&DbConfig::sqlite("wages-2025.db"))
            .await
            .unwrap();

        assert_eq!(log.list_records().await, Ok(Vec::new()));
        assert_eq!(*sqlite_opened.lock().unwrap(), vec!["wages-2025.db"]);
        assert!(archive_opened.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn later_backend_with_same_name_wins() {
        let (first, first_opened) = recording("sqlite");
        let (second, second_opened) = recording("sqlite");
        let registry = RepositoryRegistry::new().with(first).with(second);

        registry.open(&DbConfig::in_memory()).await.unwrap();

        assert_eq!(registry.backend_names(), vec!["sqlite"]);
        assert!(first_opened.lock().unwrap().is_empty());
        assert_eq!(*second_opened.lock().unwrap(), vec![":memory:"]);
    }

    #[tokio::test]
    async fn unknown_backend_lists_the_built_in_ones() {
        let (sqlite, _) = recording("sqlite");
        let registry = RepositoryRegistry::new().with(sqlite);

        let err = registry
            .open(&DbConfig::new("postgres", "wages"))
            .await
            .err();

        assert_eq!(
            err,
            Some(RepositoryError::Configuration(
                "no 'postgres' compensation log backend is built in (have: sqlite)".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn backend_failure_reaches_the_caller() {
        let registry = RepositoryRegistry::new().with(Box::new(LockedFileBackend));

        let err = registry.open(&DbConfig::sqlite("wages.db")).await.err();

        assert_eq!(
            err,
            Some(RepositoryError::Connection("wages.db is locked".to_string()))
        );
    }
}
