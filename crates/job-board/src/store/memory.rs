use std::collections::HashMap;
use std::io::Read;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document};
use serde_json::Value;

use super::{Collection, DocumentStore, StoreError};

/// Store keeping documents in insertion order, for fixtures and tests.
#[derive(Default, Clone)]
pub struct InMemoryStore {
    collections: Arc<Mutex<HashMap<Collection, Vec<Document>>>>,
}

impl InMemoryStore {
    /// Append `documents` to `collection`. Documents without an `_id` get a fresh ObjectId.
    pub fn seed(&self, collection: Collection, documents: Vec<Document>) {
        let mut guard = self.collections.lock().expect("store mutex poisoned");
        let entries = guard.entry(collection).or_default();
        for mut document in documents {
            if !document.contains_key("_id") {
                document.insert("_id", ObjectId::new());
            }
            entries.push(document);
        }
    }

    /// Build a store from a JSON object keyed by collection name. Documents may use
    /// MongoDB extended JSON, e.g. `{"_id": {"$oid": "..."}}`.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, FixtureError> {
        let root: Value = serde_json::from_reader(reader).map_err(FixtureError::Json)?;
        let Value::Object(sections) = root else {
            return Err(FixtureError::Shape("top level must be an object".to_string()));
        };

        let store = Self::default();
        for (name, section) in sections {
            let collection: Collection = name
                .parse()
                .map_err(|err: super::UnknownCollection| FixtureError::Shape(err.to_string()))?;
            let Value::Array(items) = section else {
                return Err(FixtureError::Shape(format!(
                    "'{collection}' must be an array of documents"
                )));
            };

            let mut documents = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                if !item.is_object() {
                    return Err(FixtureError::Shape(format!(
                        "{collection}[{index}] must be an object"
                    )));
                }
                let converted = Bson::try_from(item).map_err(|err| FixtureError::Document {
                    collection,
                    index,
                    detail: err.to_string(),
                })?;
                match converted {
                    Bson::Document(document) => documents.push(document),
                    other => {
                        return Err(FixtureError::Document {
                            collection,
                            index,
                            detail: format!("decoded to {:?}", other.element_type()),
                        })
                    }
                }
            }
            store.seed(collection, documents);
        }
        Ok(store)
    }

    pub fn len(&self, collection: Collection) -> usize {
        let guard = self.collections.lock().expect("store mutex poisoned");
        guard.get(&collection).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        let guard = self.collections.lock().expect("store mutex poisoned");
        guard.values().all(Vec::is_empty)
    }
}

/// Problems reading a fixture file into an [`InMemoryStore`].
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("fixture is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("unexpected fixture layout: {0}")]
    Shape(String),
    #[error("{collection}[{index}] is not a valid document: {detail}")]
    Document {
        collection: Collection,
        index: usize,
        detail: String,
    },
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn find_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let guard = self.collections.lock().expect("store mutex poisoned");
        Ok(guard.get(&collection).cloned().unwrap_or_default())
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: &ObjectId,
    ) -> Result<Option<Document>, StoreError> {
        let guard = self.collections.lock().expect("store mutex poisoned");
        let found = guard.get(&collection).and_then(|documents| {
            documents
                .iter()
                .find(|document| matches!(document.get("_id"), Some(Bson::ObjectId(oid)) if oid == id))
                .cloned()
        });
        Ok(found)
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let guard = self.collections.lock().expect("store mutex poisoned");
        let mut names: Vec<Collection> = guard.keys().copied().collect();
        names.sort();
        Ok(names.into_iter().map(|name| name.as_str().to_string()).collect())
    }
}
