use crate::{
    database::MongoDB,
    models::{DeleteResponse, InsertOneResponse, Review, UpdateResponse},
};
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::options::UpdateOptions;

pub async fn create_review(db: &MongoDB, review: Review) -> Result<InsertOneResponse, String> {
    let collection = db.collection::<Review>("reviews");

    let result = collection
        .insert_one(&review)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}

/// Reviews written by one account. A request without an email matches only
/// documents that have no email themselves.
pub async fn reviews_by_email(db: &MongoDB, email: Option<String>) -> Result<Vec<Review>, String> {
    find_reviews(db, email_filter(email)).await
}

pub(crate) fn email_filter(email: Option<String>) -> Document {
    doc! { "email": email.map(Bson::String).unwrap_or(Bson::Null) }
}

pub async fn reviews_for_meal(db: &MongoDB, meal_id: &str) -> Result<Vec<Review>, String> {
    find_reviews(db, doc! { "mealID": meal_id }).await
}

/// Rewrites the review text and nothing else. Runs as an upsert, so editing
/// a review that was deleted in the meantime recreates it as a bare document.
pub async fn update_review(
    db: &MongoDB,
    id: ObjectId,
    review_text: &str,
) -> Result<UpdateResponse, String> {
    let collection = db.collection::<Review>("reviews");

    let options = UpdateOptions::builder().upsert(true).build();
    let result = collection
        .update_one(doc! { "_id": id }, review_set_doc(review_text))
        .with_options(options)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}

pub async fn delete_review(db: &MongoDB, id: ObjectId) -> Result<DeleteResponse, String> {
    let collection = db.collection::<Review>("reviews");

    let result = collection
        .delete_one(doc! { "_id": id })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}

pub(crate) fn review_set_doc(review_text: &str) -> Document {
    doc! { "$set": { "review": review_text } }
}

async fn find_reviews(db: &MongoDB, filter: Document) -> Result<Vec<Review>, String> {
    let collection = db.collection::<Review>("reviews");

    let mut cursor = collection
        .find(filter)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut reviews = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(review) => reviews.push(review),
            Err(e) => log::error!("Error deserializing review: {}", e),
        }
    }

    Ok(reviews)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_set_doc_touches_only_the_text() {
        let update = review_set_doc("Too salty for my taste");
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get_str("review").unwrap(), "Too salty for my taste");
    }

    #[test]
    fn test_missing_email_filter_is_null_keyed() {
        let filter = email_filter(None);
        assert_eq!(filter.get("email"), Some(&Bson::Null));

        let filter = email_filter(Some("nadia@campus.edu".to_string()));
        assert_eq!(filter.get_str("email").unwrap(), "nadia@campus.edu");
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_review_listed_for_meal_until_deleted() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/UniDineDB".to_string());
        let db = MongoDB::new(&uri).await.unwrap();

        let meal_id = ObjectId::new().to_hex();
        let review = Review {
            id: None,
            meal_id: Some(meal_id.clone()),
            email: Some("nadia@campus.edu".to_string()),
            review: Some("Best shawarma on campus".to_string()),
            rating: Some(5.0),
            extra: Document::new(),
        };

        let created = create_review(&db, review).await.unwrap();
        let id = ObjectId::parse_str(created.inserted_id.unwrap()).unwrap();

        let listed = reviews_for_meal(&db, &meal_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(
            listed[0].review.as_deref(),
            Some("Best shawarma on campus")
        );

        let deleted = delete_review(&db, id).await.unwrap();
        assert_eq!(deleted.deleted_count, 1);

        let listed = reviews_for_meal(&db, &meal_id).await.unwrap();
        assert!(listed.is_empty());
    }
}
