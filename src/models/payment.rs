use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use super::oid::{deserialize_option_oid, serialize_option_oid_as_hex};

/// Payment document in the `payment` collection: an append-only log written
/// after a successful card charge. Its mere existence for an email is what
/// gates membership status, so whatever transaction metadata the frontend
/// sends (package name, date, ...) is stored as-is in `extra`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Payment {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(rename = "transactionId", skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}
