use super::policy::{Access, PathParams, PolicyTable};
use crate::database::Store;
use crate::services::{user_service, Claims, TokenService};
use crate::utils::AppError;
use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderMap, AUTHORIZATION},
    web, Error, HttpMessage, ResponseError,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

/// Enforces the access rule of every route in the table.
///
/// Token verification always runs first; the role lookup only runs for
/// `Access::Roles` routes. On success the decoded [`Claims`] are stored in the
/// request extensions for handlers to take as `web::ReqData<Claims>`. A
/// rejected request is answered here and never reaches the router, and a
/// (method, path) with no rule in the table is answered with 404.
pub struct Gate {
    table: Rc<PolicyTable>,
}

impl Gate {
    pub fn new(table: PolicyTable) -> Self {
        Self { table: Rc::new(table) }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Gate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = GateService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(GateService {
            service: Rc::new(service),
            table: Rc::clone(&self.table),
        }))
    }
}

pub struct GateService<S> {
    service: Rc<S>,
    table: Rc<PolicyTable>,
}

impl<S, B> Service<ServiceRequest> for GateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        // Same requoted path the router matches on, not the raw request target.
        let resolved = self.table.resolve(req.method(), req.match_info().as_str());

        Box::pin(async move {
            let outcome = match resolved {
                Some((Access::Public, _)) => Ok(None),
                Some((access, params)) => authorize(&req, access, &params).await.map(Some),
                None => Err(AppError::NotFound("route")),
            };

            match outcome {
                Ok(claims) => {
                    if let Some(claims) = claims {
                        req.extensions_mut().insert(claims);
                    }
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                Err(e) => {
                    log::warn!("🚫 {} {} rejected: {}", req.method(), req.path(), e);
                    let response = e.error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

async fn authorize(req: &ServiceRequest, access: Access, params: &PathParams) -> Result<Claims, AppError> {
    let tokens = req.app_data::<web::Data<TokenService>>().ok_or_else(|| {
        log::error!("❌ TokenService missing from app data");
        AppError::Unauthorized
    })?;
    let claims = tokens.verify(bearer_token(req.headers())?)?;

    match access {
        Access::Public | Access::Token => {}
        Access::SelfOnly(param) => {
            let requested = params.iter().find(|(name, _)| *name == param).map(|(_, value)| value.as_str());
            if claims.email().is_none() || claims.email() != requested {
                return Err(AppError::Forbidden);
            }
        }
        Access::Roles(required) => {
            let store = req.app_data::<web::Data<dyn Store>>().ok_or_else(|| {
                log::error!("❌ Store missing from app data");
                AppError::Forbidden
            })?;
            let email = claims.email().ok_or(AppError::Forbidden)?;
            match user_service::find_role(store.get_ref(), email).await? {
                Some(role) if required.contains(&role) => {}
                _ => return Err(AppError::Forbidden),
            }
        }
    }

    Ok(claims)
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AppError::Unauthorized)
}
