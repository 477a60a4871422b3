//! In-process [`Store`] used by the test suite.

use super::{
    Collection, Criterion, DeleteOutcome, Document, Filter, InsertOutcome, Store, StoreError, UpdateOutcome,
};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(filter: &Filter, doc: &Document) -> bool {
    filter.criteria().iter().all(|criterion| match criterion {
        Criterion::Id(id) => doc.get("_id") == Some(&Value::String(id.to_hex())),
        Criterion::Eq(field, value) => doc.get(field) == Some(value),
    })
}

fn with_new_id(mut doc: Document) -> (String, Document) {
    let id = ObjectId::new().to_hex();
    doc.insert("_id".to_string(), Value::String(id.clone()));
    (id, doc)
}

#[async_trait]
impl Store for MemoryStore {
    async fn find(&self, collection: Collection, filter: Filter) -> Result<Vec<Document>, StoreError> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(&collection)
            .map(|docs| docs.iter().filter(|d| matches(&filter, d)).cloned().collect())
            .unwrap_or_default())
    }

    async fn find_one(&self, collection: Collection, filter: Filter) -> Result<Option<Document>, StoreError> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(&collection)
            .and_then(|docs| docs.iter().find(|d| matches(&filter, d)).cloned()))
    }

    async fn insert_one(&self, collection: Collection, doc: Document) -> Result<InsertOutcome, StoreError> {
        let (id, doc) = with_new_id(doc);
        self.collections.write().await.entry(collection).or_default().push(doc);
        Ok(InsertOutcome {
            acknowledged: true,
            inserted_id: id,
        })
    }

    async fn insert_if_absent(
        &self,
        collection: Collection,
        key: Filter,
        doc: Document,
    ) -> Result<Option<InsertOutcome>, StoreError> {
        let mut guard = self.collections.write().await;
        let docs = guard.entry(collection).or_default();
        if docs.iter().any(|d| matches(&key, d)) {
            return Ok(None);
        }
        let (id, doc) = with_new_id(doc);
        docs.push(doc);
        Ok(Some(InsertOutcome {
            acknowledged: true,
            inserted_id: id,
        }))
    }

    async fn update_one(&self, collection: Collection, filter: Filter, set: Document) -> Result<UpdateOutcome, StoreError> {
        let mut guard = self.collections.write().await;
        let target = guard
            .get_mut(&collection)
            .and_then(|docs| docs.iter_mut().find(|d| matches(&filter, d)));

        let (matched, modified) = match target {
            Some(doc) => {
                let mut changed = false;
                for (field, value) in set {
                    if doc.get(&field) != Some(&value) {
                        doc.insert(field, value);
                        changed = true;
                    }
                }
                (1, u64::from(changed))
            }
            None => (0, 0),
        };

        Ok(UpdateOutcome {
            acknowledged: true,
            matched_count: matched,
            modified_count: modified,
            upserted_id: None,
            upserted_count: 0,
        })
    }

    async fn delete_one(&self, collection: Collection, filter: Filter) -> Result<DeleteOutcome, StoreError> {
        let mut guard = self.collections.write().await;
        let deleted = match guard.get_mut(&collection) {
            Some(docs) => match docs.iter().position(|d| matches(&filter, d)) {
                Some(index) => {
                    docs.remove(index);
                    1
                }
                None => 0,
            },
            None => 0,
        };
        Ok(DeleteOutcome {
            acknowledged: true,
            deleted_count: deleted,
        })
    }

    async fn count(&self, collection: Collection, filter: Filter) -> Result<u64, StoreError> {
        Ok(self.find(collection, filter).await?.len() as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
