//! MongoDB backend for [`DocumentStore`].
//!
//! Documents are converted through relaxed extended JSON so that the data
//! service only ever sees plain JSON objects. `_id` is projected out of
//! every read.

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{self, doc, Bson, Document as BsonDocument},
    Client, Collection, Database,
};
use serde_json::Value;
use tracing::info;

use super::{Direction, Document, DocumentStore, Filter, Sort, UpdateResult};
use crate::errors::ServiceError;

pub struct MongoDocumentStore {
    db: Database,
}

impl MongoDocumentStore {
    pub async fn connect(url: &str, database: &str) -> Result<Arc<Self>, ServiceError> {
        let client = Client::with_uri_str(url)
            .await
            .map_err(|e| ServiceError::Db(format!("mongo connect failed: {e}")))?;
        info!(database = %database, "mongo_client_ready");
        Ok(Arc::new(Self { db: client.database(database) }))
    }

    fn collection(&self, name: &str) -> Collection<BsonDocument> {
        self.db.collection::<BsonDocument>(name)
    }
}

fn hidden_id() -> BsonDocument {
    doc! { "_id": 0 }
}

fn to_bson(document: &Document) -> Result<BsonDocument, ServiceError> {
    bson::to_document(document).map_err(ServiceError::db)
}

fn filter_to_bson(filter: &Filter) -> Result<BsonDocument, ServiceError> {
    to_bson(&filter.to_document())
}

fn from_bson(mut document: BsonDocument) -> Result<Document, ServiceError> {
    document.remove("_id");
    match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(map) => Ok(map),
        other => Err(ServiceError::Db(format!("unexpected document shape: {other}"))),
    }
}

fn sort_to_bson(sort: Sort) -> BsonDocument {
    let dir = match sort.direction {
        Direction::Ascending => 1,
        Direction::Descending => -1,
    };
    let mut sort_doc = BsonDocument::new();
    sort_doc.insert(sort.field, dir);
    sort_doc
}

fn id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    async fn find(&self, collection: &str, filter: &Filter, sort: Option<Sort>) -> Result<Vec<Document>, ServiceError> {
        let mut action = self.collection(collection).find(filter_to_bson(filter)?).projection(hidden_id());
        if let Some(sort) = sort {
            action = action.sort(sort_to_bson(sort));
        }
        let cursor = action.await.map_err(ServiceError::db)?;
        let raw: Vec<BsonDocument> = cursor.try_collect().await.map_err(ServiceError::db)?;
        raw.into_iter().map(from_bson).collect()
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, ServiceError> {
        self.collection(collection)
            .find_one(filter_to_bson(filter)?)
            .projection(hidden_id())
            .await
            .map_err(ServiceError::db)?
            .map(from_bson)
            .transpose()
    }

    async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, ServiceError> {
        self.collection(collection)
            .count_documents(filter_to_bson(filter)?)
            .await
            .map_err(ServiceError::db)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<String, ServiceError> {
        let result = self
            .collection(collection)
            .insert_one(to_bson(&document)?)
            .await
            .map_err(ServiceError::db)?;
        Ok(id_to_string(result.inserted_id))
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateResult, ServiceError> {
        let update = doc! { "$set": to_bson(&set)? };
        let result = self
            .collection(collection)
            .update_one(filter_to_bson(filter)?, update)
            .upsert(upsert)
            .await
            .map_err(ServiceError::db)?;
        Ok(UpdateResult {
            matched: result.matched_count,
            modified: result.modified_count,
            upserted: result.upserted_id.is_some(),
        })
    }

    async fn delete_one(&self, collection: &str, filter: &Filter) -> Result<u64, ServiceError> {
        let result = self
            .collection(collection)
            .delete_one(filter_to_bson(filter)?)
            .await
            .map_err(ServiceError::db)?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| ServiceError::Db(format!("health check failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn documents_convert_without_storage_id() -> Result<(), anyhow::Error> {
        let mut raw = doc! { "id": "a", "order": 3_i64, "featured": true, "includes": ["x", "y"] };
        raw.insert("_id", bson::oid::ObjectId::new());
        let converted = from_bson(raw)?;
        assert!(converted.get("_id").is_none());
        assert_eq!(Value::Object(converted), json!({"id": "a", "order": 3, "featured": true, "includes": ["x", "y"]}));
        Ok(())
    }

    #[test]
    fn sort_document_direction() {
        assert_eq!(sort_to_bson(Sort::descending("created_at")), doc! { "created_at": -1 });
        assert_eq!(sort_to_bson(Sort::ascending("order")), doc! { "order": 1 });
    }

    /// Round trip against a live server; runs only when `MONGO_URL` is set.
    #[tokio::test]
    async fn live_round_trip() -> Result<(), anyhow::Error> {
        let Ok(url) = std::env::var("MONGO_URL") else { return Ok(()) };
        let db_name = format!("studio_test_{}", uuid::Uuid::new_v4().simple());
        let store = MongoDocumentStore::connect(&url, &db_name).await?;
        store.ping().await?;

        let Value::Object(document) = json!({"id": "m1", "order": 1}) else { unreachable!() };
        store.insert_one("portfolio", document).await?;
        let found = store.find_one("portfolio", &Filter::by_id("m1")).await?;
        assert_eq!(found.and_then(|d| d.get("order").cloned()), Some(json!(1)));
        assert_eq!(store.delete_one("portfolio", &Filter::by_id("m1")).await?, 1);

        store.db.drop().await?;
        Ok(())
    }
}
