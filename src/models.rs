//! Frontend Models
//!
//! Wire-level data structures matching the remote store's REST contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Todo record as stored remotely
///
/// The identifier is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Request body shared by the create and update endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodoPayload {
    pub title: String,
    pub description: String,
}

/// Envelope returned by the list endpoint
///
/// The store spells the success flag `sucess`; that literal name is the
/// wire contract and must not be corrected here.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TodoListResponse {
    #[serde(default)]
    pub sucess: bool,
    #[serde(default)]
    pub data: Value,
}

impl TodoListResponse {
    /// Decode a raw JSON payload, falling back to the inert default.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Fail-soft record extraction.
    ///
    /// Anything other than a truthy `sucess` flag carrying an array of
    /// well-formed records is treated as "no data", never as an error.
    pub fn into_records(self) -> Vec<Todo> {
        if !self.sucess {
            return Vec::new();
        }
        match self.data {
            Value::Array(_) => serde_json::from_value(self.data).unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}
