//! Every endpoint of the service together with its access rule.
//!
//! The same table registers the routes and feeds the [`Gate`](crate::middleware::Gate),
//! so a route cannot exist without an explicit rule.

use super::{auth, camps, health, interests, registrations, reviews, upcoming, users};
use crate::middleware::policy::{Access, Policy, PolicyTable};
use crate::models::Role;
use actix_web::{http::Method, web, Route};

const STAFF: &[Role] = &[Role::Admin, Role::Organizer];
const ORGANIZER: &[Role] = &[Role::Organizer];
const ADMIN: &[Role] = &[Role::Admin];

pub struct Endpoint {
    pub policy: Policy,
    handler: fn() -> Route,
}

fn endpoint(method: Method, path: &'static str, access: Access, handler: fn() -> Route) -> Endpoint {
    Endpoint {
        policy: Policy { method, path, access },
        handler,
    }
}

pub fn endpoints() -> Vec<Endpoint> {
    use Access::{Public, Roles, SelfOnly, Token};

    vec![
        endpoint(Method::GET, "/", Public, || web::route().to(health::index)),
        endpoint(Method::GET, "/health", Public, || web::route().to(health::health_check)),
        endpoint(Method::POST, "/jwt", Public, || web::route().to(auth::issue_token)),
        // ==================== USERS ====================
        endpoint(Method::GET, "/users", Roles(STAFF), || web::route().to(users::list_users)),
        endpoint(Method::POST, "/users", Public, || web::route().to(users::create_user)),
        endpoint(Method::DELETE, "/users/{id}", Roles(STAFF), || web::route().to(users::delete_user)),
        endpoint(Method::GET, "/users/admin/{email}", SelfOnly("email"), || web::route().to(users::is_admin)),
        endpoint(Method::GET, "/users/organizer/{email}", SelfOnly("email"), || web::route().to(users::is_organizer)),
        endpoint(Method::GET, "/users/professional/{email}", SelfOnly("email"), || {
            web::route().to(users::is_professional)
        }),
        endpoint(Method::PATCH, "/users/admin/{id}", Roles(ADMIN), || web::route().to(users::make_admin)),
        endpoint(Method::PATCH, "/users/organizer/{id}", Roles(STAFF), || web::route().to(users::make_organizer)),
        endpoint(Method::PATCH, "/users/professional/{id}", Roles(STAFF), || {
            web::route().to(users::make_professional)
        }),
        endpoint(Method::GET, "/profile/{email}", SelfOnly("email"), || web::route().to(users::get_profile)),
        endpoint(Method::PATCH, "/updateProfile", Token, || web::route().to(users::update_profile)),
        // ==================== CAMPS ====================
        endpoint(Method::GET, "/camps", Public, || web::route().to(camps::list_camps)),
        endpoint(Method::POST, "/camps", Roles(ORGANIZER), || web::route().to(camps::create_camp)),
        endpoint(Method::GET, "/update-camp/{campId}", Public, || web::route().to(camps::get_camp)),
        endpoint(Method::PATCH, "/update-camp/{campId}", Roles(ORGANIZER), || web::route().to(camps::update_camp)),
        endpoint(Method::DELETE, "/delete-camp/{campId}", Roles(ORGANIZER), || web::route().to(camps::delete_camp)),
        // ==================== REGISTRATIONS ====================
        endpoint(Method::POST, "/registeredCamp", Public, || web::route().to(registrations::register)),
        endpoint(Method::GET, "/registeredCamp/{email}", Public, || web::route().to(registrations::by_email)),
        endpoint(Method::DELETE, "/registeredCamp/{id}", Token, || web::route().to(registrations::cancel)),
        endpoint(Method::GET, "/registeredCamps", Roles(STAFF), || web::route().to(registrations::list_all)),
        endpoint(Method::PATCH, "/payment-camp/{id}", Token, || web::route().to(registrations::mark_paid)),
        endpoint(Method::PATCH, "/confirm-camp/{id}", Roles(STAFF), || web::route().to(registrations::mark_confirmed)),
        endpoint(Method::GET, "/paidCamp/{email}", Public, || web::route().to(registrations::paid_by_email)),
        // ==================== INTEREST ====================
        endpoint(Method::POST, "/interestedProfessional", Public, || {
            web::route().to(interests::express_professional)
        }),
        endpoint(Method::GET, "/interestedProfessional/{email}", Public, || {
            web::route().to(interests::professional_by_email)
        }),
        endpoint(Method::GET, "/countProfessional/{id}", Public, || web::route().to(interests::count_professionals)),
        endpoint(Method::POST, "/interestedParticipant", Public, || {
            web::route().to(interests::express_participant)
        }),
        endpoint(Method::GET, "/interestedParticipant/{email}", Public, || {
            web::route().to(interests::participant_by_email)
        }),
        endpoint(Method::GET, "/countParticipant/{id}", Public, || web::route().to(interests::count_participants)),
        // ==================== UPCOMING CAMPS ====================
        endpoint(Method::GET, "/upcomingCamp", Public, || web::route().to(upcoming::list_upcoming)),
        endpoint(Method::POST, "/upcomingCamp", Roles(ORGANIZER), || web::route().to(upcoming::create_upcoming)),
        endpoint(Method::GET, "/upcomingCamp/{id}", Public, || web::route().to(upcoming::get_upcoming)),
        endpoint(Method::PATCH, "/upcomingCamp/{id}", Roles(ORGANIZER), || web::route().to(upcoming::update_upcoming)),
        endpoint(Method::DELETE, "/upcomingCamp/{id}", Roles(ORGANIZER), || web::route().to(upcoming::delete_upcoming)),
        endpoint(Method::PATCH, "/upcomingCamp/participants/{id}", Roles(STAFF), || {
            web::route().to(upcoming::accept_participants)
        }),
        endpoint(Method::PATCH, "/upcomingCamp/professionals/{id}", Roles(STAFF), || {
            web::route().to(upcoming::accept_professionals)
        }),
        endpoint(Method::PATCH, "/upcomingCamp/publish/{id}", Roles(STAFF), || web::route().to(upcoming::publish)),
        // ==================== REVIEWS ====================
        endpoint(Method::GET, "/reviews", Public, || web::route().to(reviews::list_reviews)),
        endpoint(Method::POST, "/reviews", Token, || web::route().to(reviews::create_review)),
    ]
}

/// Mounted by `main` next to the API; read-only and public.
pub const DOC_TREES: [&str; 2] = ["/swagger-ui", "/api-docs"];

pub fn policy_table() -> PolicyTable {
    DOC_TREES.into_iter().fold(
        PolicyTable::new(endpoints().into_iter().map(|e| e.policy).collect()),
        PolicyTable::with_public_tree,
    )
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    for endpoint in endpoints() {
        let route = (endpoint.handler)().method(endpoint.policy.method.clone());
        cfg.route(endpoint.policy.path, route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_method_and_path_pair_is_declared_once() {
        let mut seen = HashSet::new();
        for endpoint in endpoints() {
            let key = (endpoint.policy.method.to_string(), endpoint.policy.path);
            assert!(seen.insert(key.clone()), "duplicate endpoint {:?}", key);
        }
    }

    #[test]
    fn mutating_routes_are_never_anonymous_except_idempotent_inserts() {
        let anonymous_writes: HashSet<&str> = ["/jwt", "/users", "/registeredCamp", "/interestedProfessional", "/interestedParticipant"]
            .into_iter()
            .collect();

        for endpoint in endpoints() {
            let Policy { method, path, access } = endpoint.policy;
            if method != Method::GET && access == Access::Public {
                assert!(anonymous_writes.contains(path), "{} {} has no access rule", method, path);
            }
        }
    }
}
