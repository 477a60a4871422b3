pub mod camp;
pub mod user;

pub use camp::*;
pub use user::*;

use crate::database::{Document, InsertOutcome};
use serde::Serialize;
use serde_json::Value;

pub const ALREADY_EXISTS: &str = "user already exists";

/// Body returned by the duplicate-checked creation routes. Both variants are sent with 200.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InsertReply {
    Inserted(InsertOutcome),
    #[serde(rename_all = "camelCase")]
    AlreadyExists {
        message: &'static str,
        inserted_id: Option<String>,
    },
}

impl From<Option<InsertOutcome>> for InsertReply {
    fn from(outcome: Option<InsertOutcome>) -> Self {
        match outcome {
            Some(inserted) => InsertReply::Inserted(inserted),
            None => InsertReply::AlreadyExists {
                message: ALREADY_EXISTS,
                inserted_id: None,
            },
        }
    }
}

/// Builds a `$set` document holding every listed field. Fields missing from
/// `body` are written as `null`, overwriting whatever was stored.
pub fn overwrite_all(body: &Document, fields: &[&str]) -> Document {
    fields
        .iter()
        .map(|field| (field.to_string(), body.get(*field).cloned().unwrap_or(Value::Null)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn duplicate_reply_is_the_legacy_sentinel() {
        let reply = InsertReply::from(None);
        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            json!({ "message": "user already exists", "insertedId": null })
        );
    }

    #[test]
    fn inserted_reply_is_the_raw_acknowledgement() {
        let reply = InsertReply::from(Some(InsertOutcome {
            acknowledged: true,
            inserted_id: "65f0c0ffee0000000000beef".into(),
        }));
        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            json!({ "acknowledged": true, "insertedId": "65f0c0ffee0000000000beef" })
        );
    }

    #[test]
    fn overwrite_all_nulls_missing_fields() {
        let body = json!({ "camp_name": "Dental day", "venue": "Hall B", "extra": true });
        let set = overwrite_all(body.as_object().unwrap(), &CAMP_FIELDS);

        assert_eq!(set.len(), CAMP_FIELDS.len());
        assert_eq!(set["camp_name"], json!("Dental day"));
        assert_eq!(set["fee"], Value::Null);
        assert!(!set.contains_key("extra"));
    }
}
