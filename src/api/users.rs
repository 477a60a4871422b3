use super::object_id;
use crate::database::{Document, Store};
use crate::models::Role;
use crate::services::{user_service, Claims};
use crate::utils::AppError;
use actix_web::{web, HttpResponse};
use serde_json::Value;

pub async fn list_users(store: web::Data<dyn Store>) -> Result<HttpResponse, AppError> {
    log::info!("👥 GET /users");
    let users = user_service::list_users(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// Called on every sign-in; a known email answers with the "already exists" sentinel.
pub async fn create_user(store: web::Data<dyn Store>, body: web::Json<Document>) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /users");
    let reply = user_service::create_user(store.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(reply))
}

pub async fn delete_user(store: web::Data<dyn Store>, id: web::Path<String>) -> Result<HttpResponse, AppError> {
    log::info!("🗑️  DELETE /users/{}", id);
    let outcome = user_service::delete_user(store.get_ref(), object_id(&id)?).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

async fn role_flag(store: &dyn Store, email: &str, role: Role) -> Result<HttpResponse, AppError> {
    log::info!("🔎 GET /users/{}/{}", role.as_str(), email);
    let holds = user_service::has_role(store, email, role).await?;

    let mut body = Document::new();
    body.insert(role.as_str().to_string(), Value::Bool(holds));
    Ok(HttpResponse::Ok().json(body))
}

#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "Must equal the token's email claim")),
    responses(
        (status = 200, description = "{ \"admin\": bool }"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Email does not belong to the caller")
    ),
    security(("bearer_auth" = []))
)]
pub async fn is_admin(store: web::Data<dyn Store>, email: web::Path<String>) -> Result<HttpResponse, AppError> {
    role_flag(store.get_ref(), &email, Role::Admin).await
}

#[utoipa::path(
    get,
    path = "/users/organizer/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "Must equal the token's email claim")),
    responses(
        (status = 200, description = "{ \"organizer\": bool }"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Email does not belong to the caller")
    ),
    security(("bearer_auth" = []))
)]
pub async fn is_organizer(store: web::Data<dyn Store>, email: web::Path<String>) -> Result<HttpResponse, AppError> {
    role_flag(store.get_ref(), &email, Role::Organizer).await
}

#[utoipa::path(
    get,
    path = "/users/professional/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "Must equal the token's email claim")),
    responses(
        (status = 200, description = "{ \"professional\": bool }"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Email does not belong to the caller")
    ),
    security(("bearer_auth" = []))
)]
pub async fn is_professional(store: web::Data<dyn Store>, email: web::Path<String>) -> Result<HttpResponse, AppError> {
    role_flag(store.get_ref(), &email, Role::Professional).await
}

async fn promote(store: &dyn Store, id: &str, role: Role) -> Result<HttpResponse, AppError> {
    log::info!("⬆️  PATCH /users/{}/{}", role.as_str(), id);
    let outcome = user_service::set_role(store, object_id(id)?, role).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

pub async fn make_admin(store: web::Data<dyn Store>, id: web::Path<String>) -> Result<HttpResponse, AppError> {
    promote(store.get_ref(), &id, Role::Admin).await
}

pub async fn make_organizer(store: web::Data<dyn Store>, id: web::Path<String>) -> Result<HttpResponse, AppError> {
    promote(store.get_ref(), &id, Role::Organizer).await
}

pub async fn make_professional(store: web::Data<dyn Store>, id: web::Path<String>) -> Result<HttpResponse, AppError> {
    promote(store.get_ref(), &id, Role::Professional).await
}

pub async fn get_profile(store: web::Data<dyn Store>, email: web::Path<String>) -> Result<HttpResponse, AppError> {
    log::info!("👤 GET /profile/{}", email);
    let user = user_service::profile(store.get_ref(), &email).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Only the caller's own profile can be changed; the body's `email` must match the token.
pub async fn update_profile(
    store: web::Data<dyn Store>,
    claims: web::ReqData<Claims>,
    body: web::Json<Document>,
) -> Result<HttpResponse, AppError> {
    let email = claims.email().ok_or(AppError::Forbidden)?;
    log::info!("✏️  PATCH /updateProfile - {}", email);

    if let Some(requested) = body.get("email") {
        if requested.as_str() != Some(email) {
            return Err(AppError::Forbidden);
        }
    }

    let outcome = user_service::update_profile(store.get_ref(), email, &body).await?;
    Ok(HttpResponse::Ok().json(outcome))
}
