use crate::database::Document;
use serde_json::Value;
use std::str::FromStr;

/// Fields written by `PATCH /updateProfile`.
pub const PROFILE_FIELDS: [&str; 3] = ["name", "phone", "address"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    Participant,
    Organizer,
    Professional,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Participant => "participant",
            Role::Organizer => "organizer",
            Role::Professional => "professional",
            Role::Admin => "admin",
        }
    }

    /// Role stored on a user document. Absent or unrecognised values mean participant.
    pub fn of(user: &Document) -> Role {
        user.get("role")
            .and_then(Value::as_str)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "participant" => Ok(Role::Participant),
            "organizer" => Ok(Role::Organizer),
            "professional" => Ok(Role::Professional),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(value: serde_json::Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn missing_role_defaults_to_participant() {
        assert_eq!(Role::of(&user(json!({ "email": "p@medicamp.org" }))), Role::Participant);
    }

    #[test]
    fn unknown_or_non_string_role_is_participant() {
        assert_eq!(Role::of(&user(json!({ "role": "superuser" }))), Role::Participant);
        assert_eq!(Role::of(&user(json!({ "role": 3 }))), Role::Participant);
    }

    #[test]
    fn stored_roles_round_trip_through_their_names() {
        for role in [Role::Participant, Role::Organizer, Role::Professional, Role::Admin] {
            assert_eq!(Role::of(&user(json!({ "role": role.as_str() }))), role);
        }
    }
}
