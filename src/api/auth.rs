use crate::services::auth_service::{TokenResponse, TokenService};
use crate::utils::AppError;
use actix_web::{web, HttpResponse};
use serde_json::{Map, Value};

/// Signs whatever identity the client posts. The claims are not trimmed,
/// so anything in the body ends up readable inside the token.
#[utoipa::path(
    post,
    path = "/jwt",
    tag = "Auth",
    request_body(content = Object, description = "Identity claims to sign, usually email and display name"),
    responses(
        (status = 200, description = "Token issued, valid for one hour", body = TokenResponse),
        (status = 400, description = "Body is not a JSON object or carries iat/exp")
    )
)]
pub async fn issue_token(
    tokens: web::Data<TokenService>,
    payload: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    log::info!(
        "🔐 POST /jwt - email: {}",
        payload.get("email").and_then(Value::as_str).unwrap_or("N/A")
    );

    let token = tokens.issue(payload)?;
    Ok(HttpResponse::Ok().json(token))
}
