pub mod auth;
pub mod camps;
pub mod health;
pub mod interests;
pub mod registrations;
pub mod reviews;
pub mod routes;
pub mod swagger;
pub mod upcoming;
pub mod users;


use crate::database::Store;
use crate::middleware::Gate;
use crate::services::TokenService;
use crate::utils::AppError;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App,
};
use mongodb::bson::oid::ObjectId;

/// App with state, JSON error handling, the access gate and every route.
/// `main` adds CORS, logging and docs on top.
pub fn build_app(
    store: web::Data<dyn Store>,
    tokens: web::Data<TokenService>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::validation(format!("invalid JSON body: {}", err)).into());

    App::new()
        .app_data(store)
        .app_data(tokens)
        .app_data(json_config)
        .wrap(Gate::new(routes::policy_table()))
        .configure(routes::configure)
}

pub(crate) fn object_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::validation(format!("invalid id '{}'", raw)))
}
