pub mod factory;
pub mod repository;

pub use factory::{
    DEFAULT_BACKEND, DEFAULT_DATABASE, DbConfig, RepositoryFactory, RepositoryRegistry,
};
pub use repository::{CompensationRepository, RepositoryError};
