use super::object_id;
use crate::database::{Collection, Document, Store};
use crate::services::camp_service;
use crate::utils::AppError;
use actix_web::{web, HttpResponse};

#[utoipa::path(
    get,
    path = "/camps",
    tag = "Camps",
    responses((status = 200, description = "Every camp document, unfiltered"))
)]
pub async fn list_camps(store: web::Data<dyn Store>) -> Result<HttpResponse, AppError> {
    log::info!("🏕️  GET /camps");
    let camps = camp_service::list(store.get_ref(), Collection::Camps).await?;
    Ok(HttpResponse::Ok().json(camps))
}

#[utoipa::path(
    post,
    path = "/camps",
    tag = "Camps",
    request_body(content = Object, description = "Camp listing fields, stored as sent"),
    responses(
        (status = 200, description = "Insert acknowledgement"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an organizer")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_camp(store: web::Data<dyn Store>, body: web::Json<Document>) -> Result<HttpResponse, AppError> {
    log::info!("➕ POST /camps");
    let outcome = camp_service::create(store.get_ref(), Collection::Camps, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

pub async fn get_camp(store: web::Data<dyn Store>, camp_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    log::info!("🔎 GET /update-camp/{}", camp_id);
    let camp = camp_service::get(store.get_ref(), Collection::Camps, object_id(&camp_id)?).await?;
    Ok(HttpResponse::Ok().json(camp))
}

/// Every listing field is rewritten; omitted ones are stored as null.
#[utoipa::path(
    patch,
    path = "/update-camp/{campId}",
    tag = "Camps",
    params(("campId" = String, Path, description = "Camp ObjectId")),
    request_body(content = Object, description = "Full set of listing fields"),
    responses(
        (status = 200, description = "Update acknowledgement"),
        (status = 400, description = "Malformed id"),
        (status = 403, description = "Caller is not an organizer")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_camp(
    store: web::Data<dyn Store>,
    camp_id: web::Path<String>,
    body: web::Json<Document>,
) -> Result<HttpResponse, AppError> {
    log::info!("✏️  PATCH /update-camp/{}", camp_id);
    let outcome = camp_service::update(store.get_ref(), Collection::Camps, object_id(&camp_id)?, &body).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

pub async fn delete_camp(store: web::Data<dyn Store>, camp_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    log::info!("🗑️  DELETE /delete-camp/{}", camp_id);
    let outcome = camp_service::delete(store.get_ref(), Collection::Camps, object_id(&camp_id)?).await?;
    Ok(HttpResponse::Ok().json(outcome))
}
