use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use super::oid::{deserialize_option_oid, serialize_option_oid_as_hex};

/// Like document in the `likes` collection: one document per like, no
/// uniqueness enforced, so the same user can appear twice for a meal.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Like {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_option_oid_as_hex",
        deserialize_with = "deserialize_option_oid",
        default
    )]
    pub id: Option<ObjectId>,
    #[serde(rename = "mealID", skip_serializing_if = "Option::is_none")]
    pub meal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}
