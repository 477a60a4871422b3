//! Declarative access rules, one per (method, path pattern).
//!
//! Patterns use actix syntax (`/users/organizer/{email}`), so the same string
//! both registers the route and looks up its rule.

use crate::models::Role;
use actix_web::http::Method;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Any valid token.
    Token,
    /// Valid token whose `email` claim equals the named path parameter.
    SelfOnly(&'static str),
    /// Valid token whose stored user holds one of these roles.
    Roles(&'static [Role]),
}

#[derive(Debug, Clone)]
pub struct Policy {
    pub method: Method,
    pub path: &'static str,
    pub access: Access,
}

pub type PathParams = Vec<(&'static str, String)>;

#[derive(Debug, Clone, Default)]
pub struct PolicyTable {
    policies: Vec<Policy>,
    /// Subtrees served to anonymous GETs, e.g. the docs UI and its assets.
    public_trees: Vec<&'static str>,
}

impl PolicyTable {
    pub fn new(policies: Vec<Policy>) -> Self {
        Self {
            policies,
            public_trees: Vec::new(),
        }
    }

    pub fn with_public_tree(mut self, prefix: &'static str) -> Self {
        self.public_trees.push(prefix);
        self
    }

    /// First rule whose method and pattern match. `None` means there is no
    /// rule for this request and it must not reach a handler.
    pub fn resolve(&self, method: &Method, path: &str) -> Option<(Access, PathParams)> {
        let matched = self
            .policies
            .iter()
            .filter(|p| p.method == *method)
            .find_map(|p| match_path(p.path, path).map(|params| (p.access, params)));
        if matched.is_some() {
            return matched;
        }

        let in_public_tree = *method == Method::GET
            && self.public_trees.iter().any(|tree| {
                path.strip_prefix(tree)
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
            });
        in_public_tree.then(|| (Access::Public, PathParams::new()))
    }
}

fn match_path(pattern: &'static str, path: &str) -> Option<PathParams> {
    let mut expected = pattern.split('/');
    let mut actual = path.split('/');
    let mut params = PathParams::new();

    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return Some(params),
            (Some(want), Some(got)) => {
                if let Some(name) = want.strip_prefix('{').and_then(|w| w.strip_suffix('}')) {
                    if got.is_empty() {
                        return None;
                    }
                    let decoded = urlencoding::decode(got).map(|c| c.into_owned()).unwrap_or_else(|_| got.to_string());
                    params.push((name, decoded));
                } else if want != got {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAFF: &[Role] = &[Role::Admin, Role::Organizer];

    fn table() -> PolicyTable {
        PolicyTable::new(vec![
            Policy { method: Method::GET, path: "/users", access: Access::Roles(STAFF) },
            Policy { method: Method::POST, path: "/users", access: Access::Public },
            Policy { method: Method::GET, path: "/users/organizer/{email}", access: Access::SelfOnly("email") },
            Policy { method: Method::PATCH, path: "/users/organizer/{id}", access: Access::Roles(STAFF) },
            Policy { method: Method::PATCH, path: "/upcomingCamp/{id}", access: Access::Roles(&[Role::Organizer]) },
            Policy { method: Method::PATCH, path: "/upcomingCamp/publish/{id}", access: Access::Roles(STAFF) },
        ])
    }

    #[test]
    fn same_path_resolves_by_method() {
        let table = table();
        assert_eq!(table.resolve(&Method::GET, "/users").map(|r| r.0), Some(Access::Roles(STAFF)));
        assert_eq!(table.resolve(&Method::POST, "/users").map(|r| r.0), Some(Access::Public));
        assert!(table.resolve(&Method::DELETE, "/users").is_none());
    }

    #[test]
    fn captures_and_decodes_path_parameters() {
        let (access, params) = table()
            .resolve(&Method::GET, "/users/organizer/dr.nadia%40medicamp.org")
            .unwrap();
        assert_eq!(access, Access::SelfOnly("email"));
        assert_eq!(params, vec![("email", "dr.nadia@medicamp.org".to_string())]);
    }

    #[test]
    fn segment_count_must_match() {
        let table = table();
        let (access, _) = table.resolve(&Method::PATCH, "/upcomingCamp/publish/65f0c0ffee0000000000beef").unwrap();
        assert_eq!(access, Access::Roles(STAFF));

        let (access, params) = table.resolve(&Method::PATCH, "/upcomingCamp/65f0c0ffee0000000000beef").unwrap();
        assert_eq!(access, Access::Roles(&[Role::Organizer]));
        assert_eq!(params[0].1, "65f0c0ffee0000000000beef");

        assert!(table.resolve(&Method::GET, "/users/organizer").is_none());
        assert!(table.resolve(&Method::GET, "/users/organizer/").is_none());
        assert!(table.resolve(&Method::GET, "/users/").is_none());
    }

    #[test]
    fn public_tree_covers_whole_segments_for_get_only() {
        let table = table().with_public_tree("/swagger-ui");
        assert_eq!(table.resolve(&Method::GET, "/swagger-ui").map(|r| r.0), Some(Access::Public));
        assert_eq!(
            table.resolve(&Method::GET, "/swagger-ui/swagger-ui.css").map(|r| r.0),
            Some(Access::Public)
        );
        assert!(table.resolve(&Method::GET, "/swagger-uix").is_none());
        assert!(table.resolve(&Method::POST, "/swagger-ui/index.html").is_none());
    }
}
