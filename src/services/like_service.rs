use crate::{
    database::MongoDB,
    models::{InsertOneResponse, Like},
};
use futures::stream::StreamExt;
use mongodb::bson::{doc, Bson, Document};
use serde::Serialize;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LikeCountResponse {
    pub count: u64,
}

pub async fn create_like(db: &MongoDB, like: Like) -> Result<InsertOneResponse, String> {
    let collection = db.collection::<Like>("likes");

    let result = collection
        .insert_one(&like)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}

/// Looks up a single user's like on a single meal. Either endpoint of the
/// pair can be absent and then matches the null key, so the frontend's
/// "did I like this?" check returns an empty array instead of failing.
pub async fn find_likes(
    db: &MongoDB,
    email: Option<String>,
    meal_id: Option<String>,
) -> Result<Vec<Like>, String> {
    find_with(db, like_filter(email, meal_id)).await
}

pub async fn likes_for_meal(db: &MongoDB, meal_id: &str) -> Result<Vec<Like>, String> {
    find_with(db, doc! { "mealID": meal_id }).await
}

/// The like feed for a meal reduced to the emails that liked it.
pub async fn same_likes(db: &MongoDB, meal_id: &str) -> Result<Vec<String>, String> {
    let likes = likes_for_meal(db, meal_id).await?;
    Ok(emails_of(likes))
}

pub async fn like_count(db: &MongoDB, meal_id: &str) -> Result<u64, String> {
    let collection = db.collection::<Like>("likes");

    collection
        .count_documents(doc! { "mealID": meal_id })
        .await
        .map_err(|e| format!("Database error: {}", e))
}

pub(crate) fn like_filter(email: Option<String>, meal_id: Option<String>) -> Document {
    doc! {
        "email": email.map(Bson::String).unwrap_or(Bson::Null),
        "mealID": meal_id.map(Bson::String).unwrap_or(Bson::Null),
    }
}

pub(crate) fn emails_of(likes: Vec<Like>) -> Vec<String> {
    likes.into_iter().filter_map(|like| like.email).collect()
}

async fn find_with(db: &MongoDB, filter: Document) -> Result<Vec<Like>, String> {
    let collection = db.collection::<Like>("likes");

    let mut cursor = collection
        .find(filter)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut likes = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(like) => likes.push(like),
            Err(e) => log::error!("Error deserializing like: {}", e),
        }
    }

    Ok(likes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{oid::ObjectId, Document};

    #[test]
    fn test_like_filter_pairs_email_and_meal() {
        let filter = like_filter(
            Some("omar@campus.edu".to_string()),
            Some("64a1f0c2e5b4a9d8f7c6b5a4".to_string()),
        );
        assert_eq!(filter.get_str("email").unwrap(), "omar@campus.edu");
        assert_eq!(filter.get_str("mealID").unwrap(), "64a1f0c2e5b4a9d8f7c6b5a4");
    }

    #[test]
    fn test_like_filter_null_keys_missing_params() {
        let filter = like_filter(None, None);
        assert_eq!(filter.get("email"), Some(&Bson::Null));
        assert_eq!(filter.get("mealID"), Some(&Bson::Null));
    }

    #[test]
    fn test_emails_of_skips_anonymous_likes() {
        let likes = vec![
            Like {
                id: None,
                meal_id: Some("64a1f0c2e5b4a9d8f7c6b5a4".to_string()),
                email: Some("omar@campus.edu".to_string()),
                extra: Document::new(),
            },
            Like {
                id: None,
                meal_id: Some("64a1f0c2e5b4a9d8f7c6b5a4".to_string()),
                email: None,
                extra: Document::new(),
            },
            Like {
                id: None,
                meal_id: Some("64a1f0c2e5b4a9d8f7c6b5a4".to_string()),
                email: Some("nadia@campus.edu".to_string()),
                extra: Document::new(),
            },
        ];

        let emails = emails_of(likes);
        assert_eq!(emails, vec!["omar@campus.edu", "nadia@campus.edu"]);
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_like_feed_and_count_for_meal() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/UniDineDB".to_string());
        let db = MongoDB::new(&uri).await.unwrap();

        let meal_id = ObjectId::new().to_hex();
        let like = Like {
            id: None,
            meal_id: Some(meal_id.clone()),
            email: Some("omar@campus.edu".to_string()),
            extra: Document::new(),
        };

        create_like(&db, like).await.unwrap();

        let likes = likes_for_meal(&db, &meal_id).await.unwrap();
        assert_eq!(likes.len(), 1);
        assert_eq!(like_count(&db, &meal_id).await.unwrap(), 1);
        assert_eq!(
            same_likes(&db, &meal_id).await.unwrap(),
            vec!["omar@campus.edu"]
        );

        db.collection::<Like>("likes")
            .delete_one(doc! { "mealID": &meal_id })
            .await
            .unwrap();
    }
}
