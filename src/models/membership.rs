use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use super::oid::{deserialize_option_oid, serialize_option_oid_as_hex};

/// Membership package in the `membership` collection. `name` is the lookup
/// key used by the checkout route.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MembershipPackage {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_option_oid_as_hex",
        deserialize_with = "deserialize_option_oid",
        default
    )]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Document,
}
