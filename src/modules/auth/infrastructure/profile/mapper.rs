use serde_json::Value;

use crate::modules::auth::domain::UserProfileSeed;
use crate::shared::errors::{AppError, AppResult, ProviderError};

use super::dto::{ArrayValue, DocumentBody, FirestoreValue, MapValue};

pub struct FirestoreMapper;

impl FirestoreMapper {
    /// Encode the profile seed as a typed document body.
    pub fn seed_document(seed: &UserProfileSeed) -> AppResult<DocumentBody> {
        match serde_json::to_value(seed)? {
            Value::Object(object) => Ok(DocumentBody {
                fields: object
                    .iter()
                    .map(|(name, value)| (name.clone(), Self::encode(value)))
                    .collect(),
            }),
            _ => Err(AppError::SerializationError(
                "Profile seed did not serialize to an object".to_string(),
            )),
        }
    }

    fn encode(value: &Value) -> FirestoreValue {
        match value {
            Value::Null => FirestoreValue::Null(()),
            Value::Bool(b) => FirestoreValue::Boolean(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FirestoreValue::Integer(i.to_string()),
                None => FirestoreValue::Double(n.as_f64().unwrap_or(0.0)),
            },
            Value::String(s) => FirestoreValue::String(s.clone()),
            Value::Array(items) => FirestoreValue::Array(ArrayValue {
                values: items.iter().map(Self::encode).collect(),
            }),
            Value::Object(fields) => FirestoreValue::Map(MapValue {
                fields: fields
                    .iter()
                    .map(|(name, value)| (name.clone(), Self::encode(value)))
                    .collect(),
            }),
        }
    }

    /// The store reports an upper-snake-case RPC status; the UI-facing code
    /// token is its lowercased, dash-separated form (e.g. `PERMISSION_DENIED`
    /// becomes `permission-denied`).
    pub fn to_provider_error(status: Option<&str>, message: String) -> ProviderError {
        let code = status
            .map(|s| s.to_ascii_lowercase().replace('_', "-"))
            .unwrap_or_else(|| "unknown".to_string());
        ProviderError::new(code, message)
    }
}
