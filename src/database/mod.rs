pub mod manager;
pub mod memory;
pub mod models;
pub mod repository;

use async_trait::async_trait;
use thiserror::Error;

pub use manager::DatabaseManager;
pub use memory::MemoryPlanetStore;
pub use models::{Planet, PlanetInput, PlanetType};
pub use repository::PgPlanetStore;

/// Errors from a planet store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Planet {0} not found")]
    NotFound(i32),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Persistence operations over the planet collection, keyed by integer id.
///
/// Each call is atomic on its own; callers never chain calls into a
/// transaction.
#[async_trait]
pub trait PlanetStore: Send + Sync {
    /// All planets ordered by id (insertion order)
    async fn find_all(&self) -> Result<Vec<Planet>, StoreError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, StoreError>;

    /// Persist a new planet; the store assigns the id
    async fn create(&self, input: PlanetInput) -> Result<Planet, StoreError>;

    /// Replace every client-owned field of an existing planet
    async fn update(&self, id: i32, input: PlanetInput) -> Result<Planet, StoreError>;

    async fn delete(&self, id: i32) -> Result<(), StoreError>;

    /// Record the stored photo filename for an existing planet
    async fn set_photo(&self, id: i32, photo_filename: &str) -> Result<Planet, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}
