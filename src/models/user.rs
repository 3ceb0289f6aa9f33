use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use super::oid::{deserialize_option_oid, serialize_option_oid_as_hex};

/// User document in the `users` collection.
///
/// `email` is the natural key (de-duplicated on insert) and `role` carries
/// the `"admin"` marker. Any other profile fields the frontend sends (photo
/// URL, badge, ...) ride along in `extra` untouched.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct User {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_option_oid_as_hex",
        deserialize_with = "deserialize_option_oid",
        default
    )]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_minimal_document() {
        let user: User = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(user.id.is_none());
        assert!(user.email.is_none());
        assert!(user.extra.is_empty());
    }

    #[test]
    fn test_keeps_unknown_profile_fields() {
        let user: User = serde_json::from_value(serde_json::json!({
            "name": "Rafia",
            "email": "rafia@campus.edu",
            "photoURL": "https://cdn.example/rafia.png",
            "badge": "Bronze"
        }))
        .unwrap();
        assert_eq!(user.email.as_deref(), Some("rafia@campus.edu"));
        assert_eq!(user.extra.get_str("badge").unwrap(), "Bronze");

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["photoURL"], "https://cdn.example/rafia.png");
    }
}
