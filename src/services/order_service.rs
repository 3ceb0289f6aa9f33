use crate::{
    database::MongoDB,
    models::{DeleteResponse, InsertOneResponse, Order, UpdateResponse},
};
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson};

/// Status stamped on an order when the kitchen marks it done. Orders arrive
/// with whatever free-text status the frontend set, usually "pending".
pub const DELIVERED_STATUS: &str = "delivered";

pub async fn place_order(db: &MongoDB, order: Order) -> Result<InsertOneResponse, String> {
    let collection = db.collection::<Order>("orders");

    let result = collection
        .insert_one(&order)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}

pub async fn orders_by_email(db: &MongoDB, email: Option<String>) -> Result<Vec<Order>, String> {
    let collection = db.collection::<Order>("orders");

    let mut cursor = collection
        .find(doc! {
            "email": email.map(Bson::String).unwrap_or(Bson::Null),
        })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut orders = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(order) => orders.push(order),
            Err(e) => log::error!("Error deserializing order: {}", e),
        }
    }

    Ok(orders)
}

pub async fn mark_order_delivered(db: &MongoDB, id: ObjectId) -> Result<UpdateResponse, String> {
    let collection = db.collection::<Order>("orders");

    let result = collection
        .update_one(
            doc! { "_id": id },
            doc! { "$set": { "status": DELIVERED_STATUS } },
        )
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}

pub async fn cancel_order(db: &MongoDB, id: ObjectId) -> Result<DeleteResponse, String> {
    let collection = db.collection::<Order>("orders");

    let result = collection
        .delete_one(doc! { "_id": id })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Document;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_order_lifecycle_place_deliver_cancel() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/UniDineDB".to_string());
        let db = MongoDB::new(&uri).await.unwrap();

        let email = format!("{}@campus.edu", ObjectId::new().to_hex());
        let order = Order {
            id: None,
            email: Some(email.clone()),
            meal_id: Some(ObjectId::new().to_hex()),
            status: Some("pending".to_string()),
            extra: Document::new(),
        };

        let placed = place_order(&db, order).await.unwrap();
        let id = ObjectId::parse_str(placed.inserted_id.unwrap()).unwrap();

        let listed = orders_by_email(&db, Some(email.clone())).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].status.as_deref(), Some("pending"));

        let updated = mark_order_delivered(&db, id).await.unwrap();
        assert_eq!(updated.matched_count, 1);

        let listed = orders_by_email(&db, Some(email.clone())).await.unwrap();
        assert_eq!(listed[0].status.as_deref(), Some(DELIVERED_STATUS));

        let cancelled = cancel_order(&db, id).await.unwrap();
        assert_eq!(cancelled.deleted_count, 1);

        let listed = orders_by_email(&db, Some(email)).await.unwrap();
        assert!(listed.is_empty());
    }
}
