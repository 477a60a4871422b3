// Camp proposals: organizers draft them, staff accept participants and
// professionals, then publish.

use super::object_id;
use crate::database::{Collection, Document, Store};
use crate::models::StatusFlag;
use crate::services::camp_service;
use crate::utils::AppError;
use actix_web::{web, HttpResponse};

pub async fn list_upcoming(store: web::Data<dyn Store>) -> Result<HttpResponse, AppError> {
    log::info!("📅 GET /upcomingCamp");
    let camps = camp_service::list(store.get_ref(), Collection::UpcomingCamps).await?;
    Ok(HttpResponse::Ok().json(camps))
}

pub async fn create_upcoming(store: web::Data<dyn Store>, body: web::Json<Document>) -> Result<HttpResponse, AppError> {
    log::info!("➕ POST /upcomingCamp");
    let outcome = camp_service::create(store.get_ref(), Collection::UpcomingCamps, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

pub async fn get_upcoming(store: web::Data<dyn Store>, id: web::Path<String>) -> Result<HttpResponse, AppError> {
    log::info!("🔎 GET /upcomingCamp/{}", id);
    let camp = camp_service::get(store.get_ref(), Collection::UpcomingCamps, object_id(&id)?).await?;
    Ok(HttpResponse::Ok().json(camp))
}

pub async fn update_upcoming(
    store: web::Data<dyn Store>,
    id: web::Path<String>,
    body: web::Json<Document>,
) -> Result<HttpResponse, AppError> {
    log::info!("✏️  PATCH /upcomingCamp/{}", id);
    let outcome = camp_service::update(store.get_ref(), Collection::UpcomingCamps, object_id(&id)?, &body).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

pub async fn delete_upcoming(store: web::Data<dyn Store>, id: web::Path<String>) -> Result<HttpResponse, AppError> {
    log::info!("🗑️  DELETE /upcomingCamp/{}", id);
    let outcome = camp_service::delete(store.get_ref(), Collection::UpcomingCamps, object_id(&id)?).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

async fn transition(store: &dyn Store, id: &str, flag: StatusFlag) -> Result<HttpResponse, AppError> {
    log::info!("🔁 PATCH /upcomingCamp/{}/{} -> {}", flag.field(), id, flag.value());
    let outcome = camp_service::set_flag(store, Collection::UpcomingCamps, object_id(id)?, flag).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

pub async fn accept_participants(store: web::Data<dyn Store>, id: web::Path<String>) -> Result<HttpResponse, AppError> {
    transition(store.get_ref(), &id, StatusFlag::ParticipantsAccepted).await
}

pub async fn accept_professionals(store: web::Data<dyn Store>, id: web::Path<String>) -> Result<HttpResponse, AppError> {
    transition(store.get_ref(), &id, StatusFlag::ProfessionalsAccepted).await
}

pub async fn publish(store: web::Data<dyn Store>, id: web::Path<String>) -> Result<HttpResponse, AppError> {
    transition(store.get_ref(), &id, StatusFlag::Publish).await
}
