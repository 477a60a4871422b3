use crate::database::{Collection, Document, Filter, Store};
use crate::models::InsertReply;
use crate::services::unique_insert::insert_unique;
use crate::utils::AppError;

/// Who is expressing interest in a camp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Professional,
    Participant,
}

impl Audience {
    fn collection(&self) -> Collection {
        match self {
            Audience::Professional => Collection::InterestedProfessionals,
            Audience::Participant => Collection::InterestedParticipants,
        }
    }
}

pub async fn express(store: &dyn Store, audience: Audience, interest: Document) -> Result<InsertReply, AppError> {
    insert_unique(store, audience.collection(), &["camp_id", "email"], interest).await
}

pub async fn by_email(store: &dyn Store, audience: Audience, email: &str) -> Result<Vec<Document>, AppError> {
    Ok(store.find(audience.collection(), Filter::eq("email", email)).await?)
}

pub async fn count_for_camp(store: &dyn Store, audience: Audience, camp_id: &str) -> Result<u64, AppError> {
    Ok(store.count(audience.collection(), Filter::eq("camp_id", camp_id)).await?)
}
