//! Storage seam: every handler talks to the document store through [`Store`].
//!
//! Documents cross the boundary as loosely-typed JSON objects. Primary keys
//! are MongoDB ObjectIds, rendered as 24-char hex strings under `_id`.

mod mongo;
#[cfg(test)]
pub mod memory;

pub use mongo::MongoStore;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::Serialize;
use serde_json::{Map, Value};

/// A schemaless stored document.
pub type Document = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Camps,
    RegisteredCamps,
    UpcomingCamps,
    InterestedProfessionals,
    InterestedParticipants,
    Reviews,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Camps => "camps",
            Collection::RegisteredCamps => "registeredCamp",
            Collection::UpcomingCamps => "upcomingCamp",
            Collection::InterestedProfessionals => "interestedProfessional",
            Collection::InterestedParticipants => "interestedParticipant",
            Collection::Reviews => "reviews",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    Id(ObjectId),
    Eq(String, Value),
}

/// Conjunction of equality criteria. An empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    criteria: Vec<Criterion>,
}

impl Filter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_id(id: ObjectId) -> Self {
        Self {
            criteria: vec![Criterion::Id(id)],
        }
    }

    pub fn eq(field: &str, value: impl Into<Value>) -> Self {
        Self::all().and(field, value)
    }

    pub fn and(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.criteria.push(Criterion::Eq(field.to_string(), value.into()));
        self
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOutcome {
    pub acknowledged: bool,
    pub inserted_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<String>,
    pub upserted_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("document encoding error: {0}")]
    Encoding(#[from] mongodb::bson::ser::Error),
}

/// One operation per call; no call spans more than one document write.
#[async_trait]
pub trait Store: Send + Sync {
    async fn find(&self, collection: Collection, filter: Filter) -> Result<Vec<Document>, StoreError>;

    async fn find_one(&self, collection: Collection, filter: Filter) -> Result<Option<Document>, StoreError>;

    async fn insert_one(&self, collection: Collection, doc: Document) -> Result<InsertOutcome, StoreError>;

    /// Atomically inserts `doc` unless a document matching `key` exists.
    /// Returns `None` when one already does.
    async fn insert_if_absent(
        &self,
        collection: Collection,
        key: Filter,
        doc: Document,
    ) -> Result<Option<InsertOutcome>, StoreError>;

    /// `$set` semantics: listed fields are overwritten, others untouched.
    async fn update_one(&self, collection: Collection, filter: Filter, set: Document) -> Result<UpdateOutcome, StoreError>;

    async fn delete_one(&self, collection: Collection, filter: Filter) -> Result<DeleteOutcome, StoreError>;

    async fn count(&self, collection: Collection, filter: Filter) -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
