use super::{
    Collection, Criterion, DeleteOutcome, Document, Filter, InsertOutcome, Store, StoreError, UpdateOutcome,
};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{self, doc, Bson, Document as BsonDocument};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Database, IndexModel};
use serde_json::Value;
use std::time::Duration;

const DUPLICATE_KEY: i32 = 11000;

#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let mut client_options = ClientOptions::parse(uri).await?;

        client_options.app_name = Some("medicamp-service".to_string());
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(Duration::from_secs(300));
        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let store = Self {
            db: client.database(db_name),
        };

        store.db.run_command(doc! { "ping": 1 }).await?;
        log::info!("✅ Pinged MongoDB database '{}'", db_name);

        store.ensure_indexes().await;

        Ok(store)
    }

    /// Unique keys back the idempotent inserts; a failure here is logged, not fatal.
    async fn ensure_indexes(&self) {
        log::info!("🔧 Creating database indexes...");

        let unique = || IndexOptions::builder().unique(true).build();

        let indexes = [
            (Collection::Users, doc! { "email": 1 }, true),
            (Collection::RegisteredCamps, doc! { "camp_id": 1, "email": 1 }, true),
            (Collection::RegisteredCamps, doc! { "email": 1 }, false),
            (Collection::InterestedProfessionals, doc! { "camp_id": 1, "email": 1 }, true),
            (Collection::InterestedParticipants, doc! { "camp_id": 1, "email": 1 }, true),
        ];

        for (collection, keys, is_unique) in indexes {
            let described = format!("{}({})", collection.name(), keys.keys().cloned().collect::<Vec<_>>().join(", "));
            let mut model = IndexModel::builder().keys(keys).build();
            if is_unique {
                model.options = Some(unique());
            }

            match self.raw(collection).create_index(model).await {
                Ok(_) => log::info!("   ✅ Index ready: {}", described),
                Err(e) => log::warn!("   ⚠️  Could not create index {}: {}", described, e),
            }
        }
    }

    fn raw(&self, collection: Collection) -> mongodb::Collection<BsonDocument> {
        self.db.collection(collection.name())
    }
}

fn filter_to_bson(filter: &Filter) -> Result<BsonDocument, StoreError> {
    let mut out = BsonDocument::new();
    for criterion in filter.criteria() {
        match criterion {
            Criterion::Id(id) => {
                out.insert("_id", *id);
            }
            Criterion::Eq(field, value) => {
                out.insert(field.clone(), bson::to_bson(value)?);
            }
        }
    }
    Ok(out)
}

fn to_bson_document(doc: &Document) -> Result<BsonDocument, StoreError> {
    let mut out = bson::to_document(doc)?;
    out.remove("_id");
    Ok(out)
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        other => other.into_relaxed_extjson(),
    }
}

fn from_bson_document(doc: BsonDocument) -> Document {
    doc.into_iter().map(|(k, v)| (k, bson_to_json(v))).collect()
}

fn id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY,
        _ => false,
    }
}

#[async_trait]
impl Store for MongoStore {
    async fn find(&self, collection: Collection, filter: Filter) -> Result<Vec<Document>, StoreError> {
        let cursor = self.raw(collection).find(filter_to_bson(&filter)?).await?;
        let docs: Vec<BsonDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(from_bson_document).collect())
    }

    async fn find_one(&self, collection: Collection, filter: Filter) -> Result<Option<Document>, StoreError> {
        let found = self.raw(collection).find_one(filter_to_bson(&filter)?).await?;
        Ok(found.map(from_bson_document))
    }

    async fn insert_one(&self, collection: Collection, doc: Document) -> Result<InsertOutcome, StoreError> {
        let result = self.raw(collection).insert_one(to_bson_document(&doc)?).await?;
        Ok(InsertOutcome {
            acknowledged: true,
            inserted_id: id_to_string(result.inserted_id),
        })
    }

    async fn insert_if_absent(
        &self,
        collection: Collection,
        key: Filter,
        doc: Document,
    ) -> Result<Option<InsertOutcome>, StoreError> {
        let result = self
            .raw(collection)
            .update_one(filter_to_bson(&key)?, doc! { "$setOnInsert": to_bson_document(&doc)? })
            .upsert(true)
            .await;

        match result {
            Ok(r) => Ok(r.upserted_id.map(|id| InsertOutcome {
                acknowledged: true,
                inserted_id: id_to_string(id),
            })),
            // A concurrent twin won the race against the unique index.
            Err(e) if is_duplicate_key(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn update_one(&self, collection: Collection, filter: Filter, set: Document) -> Result<UpdateOutcome, StoreError> {
        let result = self
            .raw(collection)
            .update_one(filter_to_bson(&filter)?, doc! { "$set": to_bson_document(&set)? })
            .await?;

        Ok(UpdateOutcome {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count: u64::from(result.upserted_id.is_some()),
            upserted_id: result.upserted_id.map(id_to_string),
        })
    }

    async fn delete_one(&self, collection: Collection, filter: Filter) -> Result<DeleteOutcome, StoreError> {
        let result = self.raw(collection).delete_one(filter_to_bson(&filter)?).await?;
        Ok(DeleteOutcome {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }

    async fn count(&self, collection: Collection, filter: Filter) -> Result<u64, StoreError> {
        Ok(self.raw(collection).count_documents(filter_to_bson(&filter)?).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn id_filter_uses_object_id() {
        let id = ObjectId::new();
        let filter = filter_to_bson(&Filter::by_id(id).and("email", "a@b.com")).unwrap();
        assert_eq!(filter, doc! { "_id": id, "email": "a@b.com" });
    }

    #[test]
    fn client_supplied_id_is_dropped_on_write() {
        let mut body = Document::new();
        body.insert("_id".into(), Value::from("client-chosen"));
        body.insert("camp_name".into(), Value::from("Eye care"));
        body.insert("fee".into(), Value::Null);

        let bson_doc = to_bson_document(&body).unwrap();
        assert_eq!(bson_doc, doc! { "camp_name": "Eye care", "fee": Bson::Null });
    }

    #[test]
    fn object_ids_render_as_hex_strings() {
        let id = ObjectId::new();
        let doc = from_bson_document(doc! { "_id": id, "fee": 25_i64 });
        assert_eq!(doc.get("_id"), Some(&Value::String(id.to_hex())));
        assert_eq!(doc.get("fee"), Some(&Value::from(25)));
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_connection() {
        dotenv::dotenv().ok();
        let uri = std::env::var("DATABASE_URL").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let store = MongoStore::connect(&uri, "MediCampTest").await;
        assert!(store.is_ok());
    }
}
