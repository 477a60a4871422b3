// Registered-camp join records: one per (camp_id, email), carrying the
// payment and confirmation flags.

use crate::database::{Collection, DeleteOutcome, Document, Filter, Store, UpdateOutcome};
use crate::models::{InsertReply, StatusFlag};
use crate::services::{camp_service, unique_insert::insert_unique};
use crate::utils::AppError;
use mongodb::bson::oid::ObjectId;

pub async fn register(store: &dyn Store, registration: Document) -> Result<InsertReply, AppError> {
    insert_unique(store, Collection::RegisteredCamps, &["camp_id", "email"], registration).await
}

pub async fn by_email(store: &dyn Store, email: &str) -> Result<Vec<Document>, AppError> {
    Ok(store.find(Collection::RegisteredCamps, Filter::eq("email", email)).await?)
}

pub async fn all(store: &dyn Store) -> Result<Vec<Document>, AppError> {
    Ok(store.find(Collection::RegisteredCamps, Filter::all()).await?)
}

pub async fn paid_by_email(store: &dyn Store, email: &str) -> Result<Vec<Document>, AppError> {
    let filter = Filter::eq("email", email).and(StatusFlag::Payment.field(), StatusFlag::Payment.value());
    Ok(store.find(Collection::RegisteredCamps, filter).await?)
}

pub async fn mark_paid(store: &dyn Store, id: ObjectId) -> Result<UpdateOutcome, AppError> {
    camp_service::set_flag(store, Collection::RegisteredCamps, id, StatusFlag::Payment).await
}

pub async fn mark_confirmed(store: &dyn Store, id: ObjectId) -> Result<UpdateOutcome, AppError> {
    camp_service::set_flag(store, Collection::RegisteredCamps, id, StatusFlag::Confirm).await
}

pub async fn cancel(store: &dyn Store, id: ObjectId) -> Result<DeleteOutcome, AppError> {
    Ok(store.delete_one(Collection::RegisteredCamps, Filter::by_id(id)).await?)
}
