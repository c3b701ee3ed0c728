use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use validator::Validate;

use crate::error::ApiError;

/// JSON body that has passed structural and value validation.
///
/// Rejections never reach the handler: malformed JSON, missing or
/// ill-typed fields and out-of-vocabulary values all become a 400.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(from_json_rejection)?;

        let value = validate_value::<T>(body)?;
        Ok(ValidatedJson(value))
    }
}

/// Check an already-parsed JSON document against `T`
pub fn validate_value<T>(body: Value) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_value(body).map_err(|e| {
        let message = e.to_string();
        let field_errors = missing_field(&message).map(|field| {
            let mut errors = BTreeMap::new();
            errors.insert(field.to_string(), "is required".to_string());
            errors
        });
        ApiError::validation_error(message, field_errors)
    })?;

    value.validate()?;
    Ok(value)
}

/// Name of the field in a serde "missing field `x`" message
fn missing_field(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next()
}

fn from_json_rejection(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonSyntaxError(e) => ApiError::invalid_json(e.body_text()),
        JsonRejection::MissingJsonContentType(e) => ApiError::bad_request(e.body_text()),
        other => ApiError::bad_request(other.body_text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::PlanetInput;
    use serde_json::json;

    #[test]
    fn passes_valid_payload_through_unchanged() {
        let input: PlanetInput =
            validate_value(json!({ "name": "Mars", "type": "TERRESTRIAL", "moons": 2 })).unwrap();
        assert_eq!(input.name, "Mars");
        assert_eq!(input.moons, Some(2));
    }

    #[test]
    fn reports_missing_required_field() {
        let err = validate_value::<PlanetInput>(json!({ "name": "Mars" })).unwrap_err();
        let body = err.to_json();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(body["fieldErrors"]["type"], "is required");
    }

    #[test]
    fn reports_wrong_types_and_vocabulary() {
        assert!(validate_value::<PlanetInput>(json!({ "name": 5, "type": "DWARF" })).is_err());
        assert!(validate_value::<PlanetInput>(json!({ "name": "X", "type": "STAR" })).is_err());
        assert!(validate_value::<PlanetInput>(json!(["Mars"])).is_err());
    }

    #[test]
    fn reports_range_violations_per_field() {
        let err = validate_value::<PlanetInput>(json!({
            "name": "Mars",
            "type": "TERRESTRIAL",
            "diameter": -4
        }))
        .unwrap_err();
        assert_eq!(err.to_json()["fieldErrors"]["diameter"], "must not be negative");
    }

    #[test]
    fn extracts_missing_field_name() {
        assert_eq!(missing_field("missing field `name` at line 1"), Some("name"));
        assert_eq!(missing_field("invalid type"), None);
    }
}
