use crate::{
    database::MongoDB,
    models::{DeleteResponse, InsertOneResponse, Meal, UpdateResponse},
};
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};

const MEALS_COLLECTION: &str = "meals";
const UPCOMING_COLLECTION: &str = "upcomings";

pub async fn create_meal(db: &MongoDB, meal: Meal) -> Result<InsertOneResponse, String> {
    insert_into(db, MEALS_COLLECTION, meal).await
}

pub async fn list_meals(db: &MongoDB) -> Result<Vec<Meal>, String> {
    list_from(db, MEALS_COLLECTION).await
}

pub async fn meal_details(db: &MongoDB, id: ObjectId) -> Result<Option<Meal>, String> {
    let collection = db.collection::<Meal>(MEALS_COLLECTION);

    collection
        .find_one(doc! { "_id": id })
        .await
        .map_err(|e| format!("Database error: {}", e))
}

/// Applies a dashboard edit to a published meal. Every field in the payload
/// is written as-is; only the _id is stripped so the key never changes.
pub async fn update_meal(
    db: &MongoDB,
    id: ObjectId,
    changes: Document,
) -> Result<UpdateResponse, String> {
    let collection = db.collection::<Meal>(MEALS_COLLECTION);
    let result = collection
        .update_one(doc! { "_id": id }, doc! { "$set": sanitize_changes(changes) })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}

pub(crate) fn sanitize_changes(mut changes: Document) -> Document {
    changes.remove("_id");
    changes
}

pub async fn delete_meal(db: &MongoDB, id: ObjectId) -> Result<DeleteResponse, String> {
    let collection = db.collection::<Meal>(MEALS_COLLECTION);

    let result = collection
        .delete_one(doc! { "_id": id })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}

pub async fn create_upcoming_meal(db: &MongoDB, meal: Meal) -> Result<InsertOneResponse, String> {
    insert_into(db, UPCOMING_COLLECTION, meal).await
}

pub async fn list_upcoming_meals(db: &MongoDB) -> Result<Vec<Meal>, String> {
    list_from(db, UPCOMING_COLLECTION).await
}

async fn insert_into(db: &MongoDB, name: &str, meal: Meal) -> Result<InsertOneResponse, String> {
    let collection = db.collection::<Meal>(name);

    let result = collection
        .insert_one(&meal)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}

async fn list_from(db: &MongoDB, name: &str) -> Result<Vec<Meal>, String> {
    let collection = db.collection::<Meal>(name);

    let mut cursor = collection
        .find(doc! {})
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut meals = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(meal) => meals.push(meal),
            Err(e) => log::error!("Error deserializing meal: {}", e),
        }
    }

    Ok(meals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_changes_strips_the_id() {
        let changes = sanitize_changes(doc! {
            "_id": "64a1f0c2e5b4a9d8f7c6b5a4",
            "title": "Spicy Ramen",
            "price": 8.5,
        });
        assert!(changes.get("_id").is_none());
        assert_eq!(changes.get_str("title").unwrap(), "Spicy Ramen");
        assert_eq!(changes.get_f64("price").unwrap(), 8.5);
    }

    #[test]
    fn test_sanitize_changes_without_id_is_untouched() {
        let changes = sanitize_changes(doc! { "category": "dinner" });
        assert_eq!(changes.len(), 1);
        assert_eq!(changes.get_str("category").unwrap(), "dinner");
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_created_meal_is_retrievable_by_id() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/UniDineDB".to_string());
        let db = MongoDB::new(&uri).await.unwrap();

        let meal: Meal = serde_json::from_value(serde_json::json!({
            "title": "Harissa Chickpea Bowl",
            "price": 7.25,
            "category": "lunch",
            "adminEmail": "kitchen@campus.edu"
        }))
        .unwrap();

        let created = create_meal(&db, meal).await.unwrap();
        let id = ObjectId::parse_str(created.inserted_id.unwrap()).unwrap();

        let found = meal_details(&db, id).await.unwrap();
        assert_eq!(
            found.and_then(|m| m.title).as_deref(),
            Some("Harissa Chickpea Bowl")
        );

        let deleted = delete_meal(&db, id).await.unwrap();
        assert_eq!(deleted.deleted_count, 1);
    }
}
