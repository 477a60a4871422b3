use crate::database::{Document, Store};
use crate::services::interest_service::{self, Audience};
use crate::utils::AppError;
use actix_web::{web, HttpResponse};

async fn express(store: &dyn Store, audience: Audience, body: Document) -> Result<HttpResponse, AppError> {
    log::info!("🙋 POST interest ({:?})", audience);
    let reply = interest_service::express(store, audience, body).await?;
    Ok(HttpResponse::Ok().json(reply))
}

async fn by_email(store: &dyn Store, audience: Audience, email: &str) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET interest ({:?}) for {}", audience, email);
    let records = interest_service::by_email(store, audience, email).await?;
    Ok(HttpResponse::Ok().json(records))
}

async fn count(store: &dyn Store, audience: Audience, camp_id: &str) -> Result<HttpResponse, AppError> {
    log::info!("🔢 GET interest count ({:?}) for camp {}", audience, camp_id);
    let count = interest_service::count_for_camp(store, audience, camp_id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "count": count })))
}

pub async fn express_professional(store: web::Data<dyn Store>, body: web::Json<Document>) -> Result<HttpResponse, AppError> {
    express(store.get_ref(), Audience::Professional, body.into_inner()).await
}

pub async fn express_participant(store: web::Data<dyn Store>, body: web::Json<Document>) -> Result<HttpResponse, AppError> {
    express(store.get_ref(), Audience::Participant, body.into_inner()).await
}

pub async fn professional_by_email(store: web::Data<dyn Store>, email: web::Path<String>) -> Result<HttpResponse, AppError> {
    by_email(store.get_ref(), Audience::Professional, &email).await
}

pub async fn participant_by_email(store: web::Data<dyn Store>, email: web::Path<String>) -> Result<HttpResponse, AppError> {
    by_email(store.get_ref(), Audience::Participant, &email).await
}

pub async fn count_professionals(store: web::Data<dyn Store>, camp_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    count(store.get_ref(), Audience::Professional, &camp_id).await
}

pub async fn count_participants(store: web::Data<dyn Store>, camp_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    count(store.get_ref(), Audience::Participant, &camp_id).await
}
