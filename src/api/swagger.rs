use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MediCamp Service API",
        version = "1.0.0",
        description = "Medical-camp registration backend.\n\n**Authentication:** obtain a token from `POST /jwt` and send it as `Authorization: Bearer <token>`. Tokens expire after one hour.\n\n**Roles:** participant (default), professional, organizer, admin. Role-gated routes re-read the caller's stored role on every request."
    ),
    paths(
        crate::api::health::health_check,
        crate::api::auth::issue_token,
        crate::api::users::is_admin,
        crate::api::users::is_organizer,
        crate::api::users::is_professional,
        crate::api::camps::list_camps,
        crate::api::camps::create_camp,
        crate::api::camps::update_camp,
        crate::api::registrations::register,
        crate::api::registrations::mark_paid,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::services::auth_service::TokenResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and database reachability."),
        (name = "Auth", description = "Token issuance."),
        (name = "Users", description = "User records and role checks."),
        (name = "Camps", description = "Camp listings managed by organizers."),
        (name = "Registrations", description = "Participant registrations, payment and confirmation flags."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token issued by POST /jwt"))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_core_paths_with_bearer_scheme() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/jwt"));
        assert!(doc.paths.paths.contains_key("/update-camp/{campId}"));
        for role in ["admin", "organizer", "professional"] {
            assert!(doc.paths.paths.contains_key(&format!("/users/{}/{{email}}", role)));
        }
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }

    #[test]
    fn schemaless_bodies_are_documented_as_json_objects() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        for (path, method) in [
            ("/jwt", "post"),
            ("/camps", "post"),
            ("/update-camp/{campId}", "patch"),
            ("/registeredCamp", "post"),
        ] {
            let body = &doc["paths"][path][method]["requestBody"]["content"]["application/json"];
            assert!(body["schema"].is_object(), "{} {} has no JSON body", method, path);
        }
    }
}
