use crate::database::{Document, Store};
use crate::services::review_service;
use crate::utils::AppError;
use actix_web::{web, HttpResponse};

pub async fn list_reviews(store: web::Data<dyn Store>) -> Result<HttpResponse, AppError> {
    log::info!("⭐ GET /reviews");
    let reviews = review_service::list(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(reviews))
}

pub async fn create_review(store: web::Data<dyn Store>, body: web::Json<Document>) -> Result<HttpResponse, AppError> {
    log::info!("⭐ POST /reviews");
    let outcome = review_service::create(store.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(outcome))
}
