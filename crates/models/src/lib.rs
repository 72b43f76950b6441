//! Document shapes for the studio site and the payloads the REST layer
//! accepts for them, with the boundary validation each payload needs.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

pub mod errors;
pub mod timestamp;
pub mod validation;
pub mod portfolio;
pub mod offering;
pub mod testimonial;
pub mod contact;
pub mod booking;
pub mod setting;

use errors::ModelError;

/// A document kind stored in its own collection and addressed by `id`.
pub trait StoredEntity: Serialize + DeserializeOwned + Send + Sync {
    const COLLECTION: &'static str;
}

/// Create payload: everything except identity and timestamps.
pub trait NewEntity: Send {
    type Entity: StoredEntity;

    fn validate(&self) -> Result<(), ModelError>;

    fn into_entity(self, id: String, now: DateTime<Utc>) -> Result<Self::Entity, ModelError>;
}

/// Partial update payload. Fields left as `None` are skipped when
/// serialized and are therefore never touched in storage.
pub trait EntityPatch: Serialize + Sync {
    type Entity: StoredEntity;

    fn validate(&self) -> Result<(), ModelError> { Ok(()) }

    /// The provided fields as a `$set` map.
    fn fields(&self) -> Result<Map<String, Value>, ModelError> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(ModelError::Encoding(format!("patch encoded as {other}, expected an object"))),
            Err(e) => Err(ModelError::Encoding(e.to_string())),
        }
    }

    fn is_empty(&self) -> bool {
        self.fields().map(|m| m.is_empty()).unwrap_or(true)
    }
}
