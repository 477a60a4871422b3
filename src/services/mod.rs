pub mod auth_service;
pub mod camp_service;
pub mod interest_service;
pub mod registration_service;
pub mod review_service;
pub mod unique_insert;
pub mod user_service;

pub use auth_service::{Claims, TokenService};
