use std::{collections::BTreeMap, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use serde_json::Value;
use tokio::{fs, sync::RwLock};
use tracing::debug;

use super::{compare_values, Direction, Document, DocumentStore, Filter, Sort, UpdateResult};
use crate::errors::ServiceError;

type Collections = BTreeMap<String, Vec<Document>>;

/// Document store kept in process memory, optionally mirrored to a JSON file.
///
/// Every mutation rewrites the whole file while the write lock is held, so
/// readers never see a state that was not persisted. Documents keep their
/// insertion order, which is also the tie-break order for sorts.
pub struct JsonDocumentStore {
    inner: Arc<RwLock<Collections>>,
    file_path: Option<PathBuf>,
}

impl JsonDocumentStore {
    pub fn in_memory() -> Arc<Self> {
        Arc::new(Self { inner: Arc::new(RwLock::new(Collections::new())), file_path: None })
    }

    /// Load collections from `path`, creating the file with no collections if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(ServiceError::db)?;
            }
        }

        let collections: Collections = match fs::read(&file_path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Collections::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| ServiceError::Db(format!("corrupt data file {}: {e}", file_path.display())))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty = Collections::new();
                write_file(&file_path, &empty).await?;
                empty
            }
            Err(e) => return Err(ServiceError::db(e)),
        };
        debug!(path = %file_path.display(), collections = collections.len(), "json_store_loaded");

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(collections)), file_path: Some(file_path) }))
    }

    async fn save(&self, collections: &Collections) -> Result<(), ServiceError> {
        match &self.file_path {
            Some(path) => write_file(path, collections).await,
            None => Ok(()),
        }
    }
}

async fn write_file(path: &PathBuf, collections: &Collections) -> Result<(), ServiceError> {
    let data = serde_json::to_vec_pretty(collections).map_err(ServiceError::db)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, data).await.map_err(ServiceError::db)?;
    fs::rename(&tmp, path).await.map_err(ServiceError::db)?;
    Ok(())
}

#[async_trait]
impl DocumentStore for JsonDocumentStore {
    async fn find(&self, collection: &str, filter: &Filter, sort: Option<Sort>) -> Result<Vec<Document>, ServiceError> {
        let map = self.inner.read().await;
        let mut docs: Vec<Document> = map
            .get(collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).cloned().collect())
            .unwrap_or_default();
        drop(map);

        if let Some(sort) = sort {
            docs.sort_by(|a, b| {
                let ord = compare_values(
                    a.get(sort.field).unwrap_or(&Value::Null),
                    b.get(sort.field).unwrap_or(&Value::Null),
                );
                match sort.direction {
                    Direction::Ascending => ord,
                    Direction::Descending => ord.reverse(),
                }
            });
        }
        Ok(docs)
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.get(collection).and_then(|docs| docs.iter().find(|d| filter.matches(d)).cloned()))
    }

    async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, ServiceError> {
        let map = self.inner.read().await;
        Ok(map
            .get(collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).count() as u64)
            .unwrap_or(0))
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<String, ServiceError> {
        let storage_id = match document.get("id") {
            Some(Value::String(id)) => id.clone(),
            _ => uuid::Uuid::new_v4().to_string(),
        };
        let mut map = self.inner.write().await;
        map.entry(collection.to_string()).or_default().push(document);
        self.save(&map).await?;
        Ok(storage_id)
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateResult, ServiceError> {
        let mut map = self.inner.write().await;
        let docs = map.entry(collection.to_string()).or_default();

        let result = match docs.iter_mut().find(|d| filter.matches(d)) {
            Some(doc) => {
                let mut changed = false;
                for (field, value) in set {
                    if doc.get(&field) != Some(&value) {
                        doc.insert(field, value);
                        changed = true;
                    }
                }
                UpdateResult { matched: 1, modified: u64::from(changed), upserted: false }
            }
            None if upsert => {
                let mut doc = filter.to_document();
                doc.extend(set);
                docs.push(doc);
                UpdateResult { matched: 0, modified: 0, upserted: true }
            }
            None => UpdateResult::default(),
        };

        if result.modified > 0 || result.upserted {
            self.save(&map).await?;
        }
        Ok(result)
    }

    async fn delete_one(&self, collection: &str, filter: &Filter) -> Result<u64, ServiceError> {
        let mut map = self.inner.write().await;
        let Some(docs) = map.get_mut(collection) else { return Ok(0) };
        let Some(pos) = docs.iter().position(|d| filter.matches(d)) else { return Ok(0) };
        docs.remove(pos);
        self.save(&map).await?;
        Ok(1)
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        match &self.file_path {
            Some(path) => fs::metadata(path).await.map(|_| ()).map_err(ServiceError::db),
            None => Ok(()),
        }
    }
}
