use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Document body for the document store's REST API: typed field values
/// keyed by field name.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentBody {
    pub fields: BTreeMap<String, FirestoreValue>,
}

/// Typed value encoding used by the Firestore REST API.
#[derive(Debug, Clone, Serialize)]
pub enum FirestoreValue {
    #[serde(rename = "nullValue")]
    Null(()),
    #[serde(rename = "booleanValue")]
    Boolean(bool),
    // int64 values travel as decimal strings
    #[serde(rename = "integerValue")]
    Integer(String),
    #[serde(rename = "doubleValue")]
    Double(f64),
    #[serde(rename = "stringValue")]
    String(String),
    #[serde(rename = "arrayValue")]
    Array(ArrayValue),
    #[serde(rename = "mapValue")]
    Map(MapValue),
}

#[derive(Debug, Clone, Serialize)]
pub struct ArrayValue {
    pub values: Vec<FirestoreValue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapValue {
    pub fields: BTreeMap<String, FirestoreValue>,
}

/// Error envelope returned by the document store's REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct FirestoreErrorBody {
    pub error: FirestoreErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FirestoreErrorDetail {
    pub code: Option<i64>,
    pub message: String,
    pub status: Option<String>,
}
