use crate::{
    database::MongoDB,
    models::{InsertOneResponse, UpdateResponse, User},
};
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use serde::Serialize;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AdminCheckResponse {
    pub admin: bool,
}

/// Inserts a user unless the email is already registered.
/// Repeat sign-ins come back as a no-op marker instead of an error.
pub async fn create_user(db: &MongoDB, user: User) -> Result<InsertOneResponse, String> {
    let collection = db.collection::<User>("users");

    let email = user.email.clone().map(Bson::String).unwrap_or(Bson::Null);
    let existing = collection
        .find_one(doc! { "email": email })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    if existing.is_some() {
        return Ok(InsertOneResponse {
            message: Some("user already exists".to_string()),
            inserted_id: None,
        });
    }

    let result = collection
        .insert_one(&user)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}

/// Builds the listing filter from whichever of email and name were supplied.
/// With neither present the filter is empty and the whole collection matches.
pub(crate) fn build_user_filter(email: Option<&str>, name: Option<&str>) -> Document {
    let mut filter = Document::new();
    if let Some(email) = email {
        filter.insert("email", email);
    }
    if let Some(name) = name {
        filter.insert("name", name);
    }
    filter
}

pub async fn find_users(
    db: &MongoDB,
    email: Option<&str>,
    name: Option<&str>,
) -> Result<Vec<User>, String> {
    let collection = db.collection::<User>("users");

    let mut cursor = collection
        .find(build_user_filter(email, name))
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut users = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(user) => users.push(user),
            Err(e) => log::error!("Error deserializing user: {}", e),
        }
    }

    Ok(users)
}

pub async fn make_admin(db: &MongoDB, id: ObjectId) -> Result<UpdateResponse, String> {
    let collection = db.collection::<User>("users");

    let result = collection
        .update_one(doc! { "_id": id }, doc! { "$set": { "role": "admin" } })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}

/// True only when the stored role is exactly "admin".
pub async fn is_admin(db: &MongoDB, email: &str) -> Result<bool, String> {
    let collection = db.collection::<User>("users");

    let user = collection
        .find_one(doc! { "email": email })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(user.and_then(|u| u.role).as_deref() == Some("admin"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_user_filter_empty() {
        let filter = build_user_filter(None, None);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_build_user_filter_email_only() {
        let filter = build_user_filter(Some("rima@campus.edu"), None);
        assert_eq!(filter.get_str("email").unwrap(), "rima@campus.edu");
        assert!(filter.get("name").is_none());
    }

    #[test]
    fn test_build_user_filter_name_only() {
        let filter = build_user_filter(None, Some("Rima"));
        assert_eq!(filter.get_str("name").unwrap(), "Rima");
        assert!(filter.get("email").is_none());
    }

    #[test]
    fn test_build_user_filter_both() {
        let filter = build_user_filter(Some("rima@campus.edu"), Some("Rima"));
        assert_eq!(filter.get_str("email").unwrap(), "rima@campus.edu");
        assert_eq!(filter.get_str("name").unwrap(), "Rima");
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_create_user_is_idempotent_per_email() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/UniDineDB".to_string());
        let db = MongoDB::new(&uri).await.unwrap();

        let email = format!("{}@campus.edu", ObjectId::new().to_hex());
        let user = User {
            id: None,
            name: Some("Returning Diner".to_string()),
            email: Some(email.clone()),
            role: None,
            extra: Document::new(),
        };

        let first = create_user(&db, user.clone()).await.unwrap();
        assert!(first.inserted_id.is_some());
        assert!(first.message.is_none());

        let second = create_user(&db, user).await.unwrap();
        assert!(second.inserted_id.is_none());
        assert_eq!(second.message.as_deref(), Some("user already exists"));

        db.collection::<User>("users")
            .delete_one(doc! { "email": &email })
            .await
            .unwrap();
    }
}
