use crate::database::{Collection, DeleteOutcome, Document, Filter, Store, UpdateOutcome};
use crate::models::{overwrite_all, InsertReply, Role, PROFILE_FIELDS};
use crate::services::unique_insert::insert_unique;
use crate::utils::AppError;
use mongodb::bson::oid::ObjectId;
use serde_json::Value;

pub async fn list_users(store: &dyn Store) -> Result<Vec<Document>, AppError> {
    Ok(store.find(Collection::Users, Filter::all()).await?)
}

/// First sign-in creates the user; later sign-ins hit the sentinel.
pub async fn create_user(store: &dyn Store, user: Document) -> Result<InsertReply, AppError> {
    insert_unique(store, Collection::Users, &["email"], user).await
}

pub async fn delete_user(store: &dyn Store, id: ObjectId) -> Result<DeleteOutcome, AppError> {
    Ok(store.delete_one(Collection::Users, Filter::by_id(id)).await?)
}

/// `Ok(None)` when no user is stored under `email`.
pub async fn find_role(store: &dyn Store, email: &str) -> Result<Option<Role>, AppError> {
    let user = store.find_one(Collection::Users, Filter::eq("email", email)).await?;
    Ok(user.as_ref().map(Role::of))
}

pub async fn has_role(store: &dyn Store, email: &str, role: Role) -> Result<bool, AppError> {
    Ok(find_role(store, email).await? == Some(role))
}

pub async fn set_role(store: &dyn Store, id: ObjectId, role: Role) -> Result<UpdateOutcome, AppError> {
    let mut set = Document::new();
    set.insert("role".to_string(), Value::from(role.as_str()));
    Ok(store.update_one(Collection::Users, Filter::by_id(id), set).await?)
}

pub async fn profile(store: &dyn Store, email: &str) -> Result<Document, AppError> {
    store
        .find_one(Collection::Users, Filter::eq("email", email))
        .await?
        .ok_or(AppError::NotFound("user"))
}

/// Overwrites name, phone and address; omitted ones become null.
pub async fn update_profile(store: &dyn Store, email: &str, body: &Document) -> Result<UpdateOutcome, AppError> {
    let set = overwrite_all(body, &PROFILE_FIELDS);
    Ok(store.update_one(Collection::Users, Filter::eq("email", email), set).await?)
}
