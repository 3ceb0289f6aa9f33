use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use super::oid::{deserialize_option_oid, serialize_option_oid_as_hex};

/// Meal document, stored in the `meals` collection and, with the exact same
/// shape, in the `upcomings` collection for meals not yet on the menu.
///
/// Canonical fields are optional; extra fields ride along in `extra` so the
/// document keeps whatever shape the admin dashboard posted.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Meal {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_option_oid_as_hex",
        deserialize_with = "deserialize_option_oid",
        default
    )]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    /// Email of the admin who published the meal.
    #[serde(rename = "adminEmail", skip_serializing_if = "Option::is_none")]
    pub admin_email: Option<String>,
    #[serde(rename = "prepTime", skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_extra_fields() {
        let meal: Meal = serde_json::from_value(serde_json::json!({
            "title": "Chicken Biryani",
            "price": 8.5,
            "category": "Lunch",
            "ingredients": ["rice", "chicken", "saffron"],
            "adminEmail": "chef@unidine.edu",
            "chef": "Anna",
            "spicy": true
        }))
        .unwrap();

        assert_eq!(meal.title.as_deref(), Some("Chicken Biryani"));
        assert_eq!(meal.price, Some(8.5));
        assert_eq!(meal.extra.get_str("chef").unwrap(), "Anna");

        let json = serde_json::to_value(&meal).unwrap();
        assert_eq!(json["chef"], "Anna");
        assert_eq!(json["spicy"], true);
        assert_eq!(json["adminEmail"], "chef@unidine.edu");
    }

    #[test]
    fn test_accepts_partial_documents() {
        let meal: Meal =
            serde_json::from_value(serde_json::json!({ "title": "Oatmeal" })).unwrap();
        assert!(meal.price.is_none());
        assert!(meal.rating.is_none());
    }
}
