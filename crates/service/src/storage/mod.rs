//! Document store abstraction used by the data service.
//!
//! A store holds named collections of JSON objects and supports the handful
//! of primitives the site needs: equality filters, a single sort key,
//! field-level `$set` updates (optionally upserting) and single deletes.
//! Storage-native identifiers never appear in returned documents.

use std::cmp::Ordering;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::errors::ServiceError;

pub mod json_store;
#[cfg(feature = "mongo")]
pub mod mongo;

pub use json_store::JsonDocumentStore;
#[cfg(feature = "mongo")]
pub use mongo::MongoDocumentStore;

pub type Document = Map<String, Value>;

/// Conjunction of `field == value` conditions. An empty filter matches everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, Value)>,
}

impl Filter {
    pub fn new() -> Self { Self::default() }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    pub fn by_id(id: &str) -> Self { Self::new().eq("id", id) }

    pub fn conditions(&self) -> &[(String, Value)] { &self.conditions }

    pub fn is_empty(&self) -> bool { self.conditions.is_empty() }

    /// Missing fields compare equal to `null`.
    pub fn matches(&self, doc: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field, expected)| doc.get(field).unwrap_or(&Value::Null) == expected)
    }

    pub fn to_document(&self) -> Document {
        self.conditions.iter().cloned().collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sort {
    pub field: &'static str,
    pub direction: Direction,
}

impl Sort {
    pub const fn ascending(field: &'static str) -> Self { Self { field, direction: Direction::Ascending } }

    pub const fn descending(field: &'static str) -> Self { Self { field, direction: Direction::Descending } }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateResult {
    pub matched: u64,
    pub modified: u64,
    pub upserted: bool,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find(&self, collection: &str, filter: &Filter, sort: Option<Sort>) -> Result<Vec<Document>, ServiceError>;

    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, ServiceError>;

    async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, ServiceError>;

    /// Returns the storage id of the inserted document.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<String, ServiceError>;

    /// Merge `set` into the first matching document. With `upsert`, a new
    /// document built from the filter's conditions plus `set` is inserted
    /// when nothing matches.
    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateResult, ServiceError>;

    /// Returns the number of removed documents (0 or 1).
    async fn delete_one(&self, collection: &str, filter: &Filter) -> Result<u64, ServiceError>;

    async fn ping(&self) -> Result<(), ServiceError>;
}

/// Ordering used for in-process sorts: null first, then numbers, strings
/// and booleans. Values of different kinds rank by that order.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Null => 0,
            Value::Number(_) => 1,
            Value::String(_) => 2,
            Value::Bool(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    }
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => {
                let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
                x.partial_cmp(&y).unwrap_or(Ordering::Equal)
            }
        },
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}
