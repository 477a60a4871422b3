// Camp listings. `camps` and `upcomingCamp` hold the same listing fields, so
// every function takes the target collection.

use crate::database::{Collection, DeleteOutcome, Document, Filter, InsertOutcome, Store, UpdateOutcome};
use crate::models::{overwrite_all, StatusFlag, CAMP_FIELDS};
use crate::utils::AppError;
use mongodb::bson::oid::ObjectId;
use serde_json::Value;

pub async fn list(store: &dyn Store, collection: Collection) -> Result<Vec<Document>, AppError> {
    Ok(store.find(collection, Filter::all()).await?)
}

pub async fn get(store: &dyn Store, collection: Collection, id: ObjectId) -> Result<Document, AppError> {
    store
        .find_one(collection, Filter::by_id(id))
        .await?
        .ok_or(AppError::NotFound("camp"))
}

pub async fn create(store: &dyn Store, collection: Collection, mut camp: Document) -> Result<InsertOutcome, AppError> {
    camp.remove("_id");
    Ok(store.insert_one(collection, camp).await?)
}

/// Replaces every listing field from `body`. A field the body omits is
/// stored as null rather than left as it was.
pub async fn update(
    store: &dyn Store,
    collection: Collection,
    id: ObjectId,
    body: &Document,
) -> Result<UpdateOutcome, AppError> {
    let set = overwrite_all(body, &CAMP_FIELDS);
    Ok(store.update_one(collection, Filter::by_id(id), set).await?)
}

pub async fn delete(store: &dyn Store, collection: Collection, id: ObjectId) -> Result<DeleteOutcome, AppError> {
    Ok(store.delete_one(collection, Filter::by_id(id)).await?)
}

/// Sets one workflow flag (`payment: "done"`, `publish: "done"`, ...) on a record.
pub async fn set_flag(
    store: &dyn Store,
    collection: Collection,
    id: ObjectId,
    flag: StatusFlag,
) -> Result<UpdateOutcome, AppError> {
    let mut set = Document::new();
    set.insert(flag.field().to_string(), Value::from(flag.value()));
    Ok(store.update_one(collection, Filter::by_id(id), set).await?)
}
