use crate::database::{Collection, Document, Filter, Store};
use crate::models::InsertReply;
use crate::utils::AppError;
use serde_json::Value;

/// Inserts `doc` unless a record with the same values for `key_fields` exists.
///
/// A duplicate is not an error: the caller receives the "already exists"
/// sentinel with a 200, exactly like a fresh insert.
pub async fn insert_unique(
    store: &dyn Store,
    collection: Collection,
    key_fields: &[&str],
    mut doc: Document,
) -> Result<InsertReply, AppError> {
    doc.remove("_id");

    let mut key = Filter::all();
    for field in key_fields {
        match doc.get(*field) {
            Some(value @ (Value::String(_) | Value::Number(_))) => key = key.and(field, value.clone()),
            None | Some(Value::Null) => return Err(AppError::validation(format!("'{}' is required", field))),
            Some(_) => return Err(AppError::validation(format!("'{}' must be a string or number", field))),
        }
    }

    let outcome = store.insert_if_absent(collection, key, doc).await?;
    if outcome.is_none() {
        log::info!("ℹ️  {} already holds this record, skipping insert", collection.name());
    }
    Ok(InsertReply::from(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryStore;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn second_insert_with_same_key_returns_sentinel() {
        let store = MemoryStore::new();
        let body = doc(json!({ "camp_id": "c-1", "email": "p@medicamp.org", "age": 30 }));

        let first = insert_unique(&store, Collection::RegisteredCamps, &["camp_id", "email"], body.clone())
            .await
            .unwrap();
        let second = insert_unique(&store, Collection::RegisteredCamps, &["camp_id", "email"], body)
            .await
            .unwrap();

        assert!(matches!(first, InsertReply::Inserted(_)));
        assert!(matches!(second, InsertReply::AlreadyExists { inserted_id: None, .. }));
        assert_eq!(store.count(Collection::RegisteredCamps, Filter::all()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn same_email_for_another_camp_is_a_new_record() {
        let store = MemoryStore::new();
        for camp in ["c-1", "c-2"] {
            let reply = insert_unique(
                &store,
                Collection::InterestedParticipants,
                &["camp_id", "email"],
                doc(json!({ "camp_id": camp, "email": "p@medicamp.org" })),
            )
            .await
            .unwrap();
            assert!(matches!(reply, InsertReply::Inserted(_)));
        }
        assert_eq!(store.count(Collection::InterestedParticipants, Filter::all()).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn missing_key_field_is_a_validation_error() {
        let store = MemoryStore::new();
        let err = insert_unique(&store, Collection::Users, &["email"], doc(json!({ "name": "No Mail" })))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn structured_key_values_are_rejected() {
        let store = MemoryStore::new();
        seed_one(&store).await;

        for body in [
            json!({ "email": { "$gt": "" } }),
            json!({ "email": ["p@medicamp.org"] }),
            json!({ "email": true }),
        ] {
            let err = insert_unique(&store, Collection::Users, &["email"], doc(body)).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(ref msg) if msg == "'email' must be a string or number"));
        }
        assert_eq!(store.count(Collection::Users, Filter::all()).await.unwrap(), 1);
    }

    async fn seed_one(store: &MemoryStore) {
        insert_unique(store, Collection::Users, &["email"], doc(json!({ "email": "p@medicamp.org" })))
            .await
            .unwrap();
    }
}
