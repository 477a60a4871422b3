use crate::database::{Collection, Document, Filter, InsertOutcome, Store};
use crate::utils::AppError;

pub async fn list(store: &dyn Store) -> Result<Vec<Document>, AppError> {
    Ok(store.find(Collection::Reviews, Filter::all()).await?)
}

pub async fn create(store: &dyn Store, mut review: Document) -> Result<InsertOutcome, AppError> {
    review.remove("_id");
    Ok(store.insert_one(Collection::Reviews, review).await?)
}
