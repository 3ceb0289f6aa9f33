use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use super::oid::{deserialize_option_oid, serialize_option_oid_as_hex};

/// Order document in the `orders` collection ("requested meals"). `status`
/// is free text at insert time; the status-update route later pins it to
/// the fixed delivered value.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Order {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_option_oid_as_hex",
        deserialize_with = "deserialize_option_oid",
        default
    )]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "mealID", skip_serializing_if = "Option::is_none")]
    pub meal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}
