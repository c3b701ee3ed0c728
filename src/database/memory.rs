use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::database::models::{Planet, PlanetInput};
use crate::database::{PlanetStore, StoreError};

/// Process-local planet store used when no database is configured.
///
/// Ids come from a counter that only moves forward, so deleted ids are
/// never handed out again.
#[derive(Default)]
pub struct MemoryPlanetStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i32,
    planets: BTreeMap<i32, Planet>,
}

impl MemoryPlanetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlanetStore for MemoryPlanetStore {
    async fn find_all(&self) -> Result<Vec<Planet>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.planets.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.planets.get(&id).cloned())
    }

    async fn create(&self, input: PlanetInput) -> Result<Planet, StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Unavailable("planet id space exhausted".to_string()))?;
        inner.last_id = id;

        let planet = Planet::from_input(id, input, Utc::now());
        inner.planets.insert(id, planet.clone());
        Ok(planet)
    }

    async fn update(&self, id: i32, input: PlanetInput) -> Result<Planet, StoreError> {
        let mut inner = self.inner.write().await;
        let planet = inner.planets.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        planet.replace_with(input, Utc::now());
        Ok(planet.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .planets
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn set_photo(&self, id: i32, photo_filename: &str) -> Result<Planet, StoreError> {
        let mut inner = self.inner.write().await;
        let planet = inner.planets.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        planet.photo_filename = Some(photo_filename.to_string());
        planet.updated_at = Utc::now();
        Ok(planet.clone())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
