use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::{Planet, PlanetInput};
use crate::database::{PlanetStore, StoreError};

const PLANET_COLUMNS: &str = "id, name, description, planet_type, diameter, moons, \
     photo_filename, created_at, updated_at";

/// Planet store backed by the `planets` table
#[derive(Clone)]
pub struct PgPlanetStore {
    pool: PgPool,
}

impl PgPlanetStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Turn an empty `RETURNING` result into the store's not-found signal
fn found(id: i32, row: Option<Planet>) -> Result<Planet, StoreError> {
    row.ok_or(StoreError::NotFound(id))
}

#[async_trait]
impl PlanetStore for PgPlanetStore {
    async fn find_all(&self) -> Result<Vec<Planet>, StoreError> {
        let sql = format!("SELECT {} FROM planets ORDER BY id", PLANET_COLUMNS);
        let rows = sqlx::query_as::<_, Planet>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, StoreError> {
        let sql = format!("SELECT {} FROM planets WHERE id = $1", PLANET_COLUMNS);
        let row = sqlx::query_as::<_, Planet>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, input: PlanetInput) -> Result<Planet, StoreError> {
        let sql = format!(
            "INSERT INTO planets (name, description, planet_type, diameter, moons) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            PLANET_COLUMNS
        );
        let row = sqlx::query_as::<_, Planet>(&sql)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.planet_type)
            .bind(input.diameter)
            .bind(input.moons)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, input: PlanetInput) -> Result<Planet, StoreError> {
        let sql = format!(
            "UPDATE planets SET name = $2, description = $3, planet_type = $4, diameter = $5, \
             moons = $6, updated_at = now() WHERE id = $1 RETURNING {}",
            PLANET_COLUMNS
        );
        let row = sqlx::query_as::<_, Planet>(&sql)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.planet_type)
            .bind(input.diameter)
            .bind(input.moons)
            .fetch_optional(&self.pool)
            .await?;
        found(id, row)
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM planets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn set_photo(&self, id: i32, photo_filename: &str) -> Result<Planet, StoreError> {
        let sql = format!(
            "UPDATE planets SET photo_filename = $2, updated_at = now() WHERE id = $1 RETURNING {}",
            PLANET_COLUMNS
        );
        let row = sqlx::query_as::<_, Planet>(&sql)
            .bind(id)
            .bind(photo_filename)
            .fetch_optional(&self.pool)
            .await?;
        found(id, row)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
