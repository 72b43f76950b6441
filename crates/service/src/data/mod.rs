//! Data access layer for the studio site.
//!
//! `DataService` owns a shared [`DocumentStore`] handle and exposes one
//! method per entity and operation. Each method is a single filter, sort,
//! insert, update or delete against one collection; typed query and patch
//! structs are translated into store filters and `$set` documents here.

use std::sync::Arc;

use chrono::Utc;
use models::{timestamp, EntityPatch, NewEntity, StoredEntity};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::{Document, DocumentStore, Filter, Sort};

mod bookings;
mod contact;
mod offerings;
mod portfolio;
mod settings;
mod testimonials;

pub use offerings::ServiceQuery;
pub use portfolio::PortfolioQuery;
pub use testimonials::TestimonialQuery;

/// Optional status filter shared by the contact and booking inboxes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusQuery {
    pub status: Option<String>,
}

impl StatusQuery {
    pub fn status(status: impl Into<String>) -> Self { Self { status: Some(status.into()) } }

    fn filter(&self) -> Filter {
        match self.status.as_deref() {
            Some(s) if !s.is_empty() => Filter::new().eq("status", s),
            _ => Filter::new(),
        }
    }
}

#[derive(Clone)]
pub struct DataService {
    store: Arc<dyn DocumentStore>,
}

impl DataService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self { Self { store } }

    pub async fn ping(&self) -> Result<(), ServiceError> { self.store.ping().await }

    pub(crate) fn store(&self) -> &dyn DocumentStore { self.store.as_ref() }

    pub(crate) async fn list<E: StoredEntity>(&self, filter: Filter, sort: Sort) -> Result<Vec<E>, ServiceError> {
        self.store
            .find(E::COLLECTION, &filter, Some(sort))
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub(crate) async fn count<E: StoredEntity>(&self) -> Result<u64, ServiceError> {
        self.store.count(E::COLLECTION, &Filter::new()).await
    }

    /// Assign identity and timestamps, insert. Returns the new `id`.
    /// Payloads arrive already checked by the REST layer.
    pub(crate) async fn create<N: NewEntity>(&self, input: N) -> Result<String, ServiceError> {
        let id = Uuid::new_v4().to_string();
        let entity = input.into_entity(id.clone(), Utc::now())?;
        self.store.insert_one(N::Entity::COLLECTION, encode(&entity)?).await?;
        Ok(id)
    }

    /// `$set` of the provided fields plus `updated_at`. `true` iff a
    /// document matched and was modified.
    pub(crate) async fn update<P: EntityPatch>(&self, id: &str, patch: &P) -> Result<bool, ServiceError> {
        let mut set = patch.fields()?;
        if set.is_empty() {
            return Err(ServiceError::Validation("No fields to update".into()));
        }
        set.insert("updated_at".into(), Value::String(timestamp::format(&Utc::now())));
        let result = self.store.update_one(P::Entity::COLLECTION, &Filter::by_id(id), set, false).await?;
        Ok(result.matched > 0 && result.modified > 0)
    }

    pub(crate) async fn delete<E: StoredEntity>(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(self.store.delete_one(E::COLLECTION, &Filter::by_id(id)).await? > 0)
    }
}

pub(crate) fn decode<T: serde::de::DeserializeOwned>(doc: Document) -> Result<T, ServiceError> {
    serde_json::from_value(Value::Object(doc)).map_err(|e| ServiceError::Db(format!("malformed document: {e}")))
}

pub(crate) fn encode<T: serde::Serialize>(value: &T) -> Result<Document, ServiceError> {
    match serde_json::to_value(value).map_err(ServiceError::db)? {
        Value::Object(map) => Ok(map),
        other => Err(ServiceError::Db(format!("expected an object, got {other}"))),
    }
}
