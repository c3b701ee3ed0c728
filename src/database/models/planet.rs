use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Fixed vocabulary for a planet's classification.
/// Stored as the Postgres enum `planet_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "planet_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanetType {
    Terrestrial,
    GasGiant,
    IceGiant,
    Dwarf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub planet_type: PlanetType,
    pub diameter: Option<i32>,
    pub moons: Option<i32>,
    pub photo_filename: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied planet fields, accepted by create and replace.
///
/// Structural checks (required keys, JSON types, the `type` vocabulary)
/// happen during deserialization; value ranges are checked by `validate()`.
/// Unknown keys such as `id` or `photoFilename` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlanetInput {
    #[validate(length(min = 1, max = 128, message = "must be between 1 and 128 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 1024, message = "must be at most 1024 characters"))]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub planet_type: PlanetType,
    #[serde(default)]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub diameter: Option<i32>,
    #[serde(default)]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub moons: Option<i32>,
}

impl Planet {
    /// Build a stored record from validated input
    pub fn from_input(id: i32, input: PlanetInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            planet_type: input.planet_type,
            diameter: input.diameter,
            moons: input.moons,
            photo_filename: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full replace of the client-owned fields; keeps id, photo and createdAt
    pub fn replace_with(&mut self, input: PlanetInput, now: DateTime<Utc>) {
        self.name = input.name;
        self.description = input.description;
        self.planet_type = input.planet_type;
        self.diameter = input.diameter;
        self.moons = input.moons;
        self.updated_at = now;
    }
}
