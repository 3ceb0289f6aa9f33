use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use super::oid::{deserialize_option_oid, serialize_option_oid_as_hex};

/// Review document in the `reviews` collection. `mealID` is an untyped
/// string reference to the reviewed meal, exactly as the frontend sends it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Review {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(flatten)]
    pub extra: Document,
}

/// Body of `PUT /reviews/{id}`: only the review text is replaced.
#[derive(Debug, Deserialize)]
pub struct ReviewUpdateRequest {
    pub review: String,
}
