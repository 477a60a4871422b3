use super::object_id;
use crate::database::{Document, Store};
use crate::services::registration_service;
use crate::utils::AppError;
use actix_web::{web, HttpResponse};

/// Duplicate (camp_id, email) pairs answer 200 with the "already exists" sentinel.
#[utoipa::path(
    post,
    path = "/registeredCamp",
    tag = "Registrations",
    request_body(content = Object, description = "Registration with camp_id and email"),
    responses(
        (status = 200, description = "Insert acknowledgement, or { message: \"user already exists\", insertedId: null }"),
        (status = 400, description = "camp_id or email missing")
    )
)]
pub async fn register(store: web::Data<dyn Store>, body: web::Json<Document>) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /registeredCamp");
    let reply = registration_service::register(store.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(reply))
}

pub async fn by_email(store: web::Data<dyn Store>, email: web::Path<String>) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /registeredCamp/{}", email);
    let records = registration_service::by_email(store.get_ref(), &email).await?;
    Ok(HttpResponse::Ok().json(records))
}

pub async fn list_all(store: web::Data<dyn Store>) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /registeredCamps");
    let records = registration_service::all(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(records))
}

pub async fn cancel(store: web::Data<dyn Store>, id: web::Path<String>) -> Result<HttpResponse, AppError> {
    log::info!("🗑️  DELETE /registeredCamp/{}", id);
    let outcome = registration_service::cancel(store.get_ref(), object_id(&id)?).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

#[utoipa::path(
    patch,
    path = "/payment-camp/{id}",
    tag = "Registrations",
    params(("id" = String, Path, description = "Registration ObjectId")),
    responses(
        (status = 200, description = "Update acknowledgement; sets payment to \"done\""),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn mark_paid(store: web::Data<dyn Store>, id: web::Path<String>) -> Result<HttpResponse, AppError> {
    log::info!("💳 PATCH /payment-camp/{}", id);
    let outcome = registration_service::mark_paid(store.get_ref(), object_id(&id)?).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

pub async fn mark_confirmed(store: web::Data<dyn Store>, id: web::Path<String>) -> Result<HttpResponse, AppError> {
    log::info!("✅ PATCH /confirm-camp/{}", id);
    let outcome = registration_service::mark_confirmed(store.get_ref(), object_id(&id)?).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

pub async fn paid_by_email(store: web::Data<dyn Store>, email: web::Path<String>) -> Result<HttpResponse, AppError> {
    log::info!("💰 GET /paidCamp/{}", email);
    let records = registration_service::paid_by_email(store.get_ref(), &email).await?;
    Ok(HttpResponse::Ok().json(records))
}
