pub mod auth;
pub mod policy;
pub mod security_headers;

pub use auth::Gate;
pub use security_headers::SecurityHeaders;
