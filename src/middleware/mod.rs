pub mod auth;
pub mod planet_id;
pub mod upload;
pub mod validate_body;

pub use auth::{require_authorization, Principal};
pub use planet_id::{match_planet_id, PlanetId};
pub use upload::{PhotoUpload, PHOTO_FIELD};
pub use validate_body::ValidatedJson;
