use crate::{
    database::MongoDB,
    models::{InsertOneResponse, Payment},
};
use futures::stream::StreamExt;
use mongodb::bson::{doc, Bson};

pub async fn record_payment(db: &MongoDB, payment: Payment) -> Result<InsertOneResponse, String> {
    let collection = db.collection::<Payment>("payment");

    let result = collection
        .insert_one(&payment)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}

/// Membership gate: does this email have at least one recorded payment.
pub async fn has_payment(db: &MongoDB, email: Option<String>) -> Result<bool, String> {
    let collection = db.collection::<Payment>("payment");

    let count = collection
        .count_documents(doc! {
            "email": email.map(Bson::String).unwrap_or(Bson::Null),
        })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(count > 0)
}

pub async fn payments_by_email(
    db: &MongoDB,
    email: Option<String>,
) -> Result<Vec<Payment>, String> {
    let collection = db.collection::<Payment>("payment");

    let mut cursor = collection
        .find(doc! {
            "email": email.map(Bson::String).unwrap_or(Bson::Null),
        })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut payments = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(payment) => payments.push(payment),
            Err(e) => log::error!("Error deserializing payment: {}", e),
        }
    }

    Ok(payments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{oid::ObjectId, Document};

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_has_payment_only_for_the_paying_email() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/UniDineDB".to_string());
        let db = MongoDB::new(&uri).await.unwrap();

        let email = format!("{}@campus.edu", ObjectId::new().to_hex());
        assert!(!has_payment(&db, Some(email.clone())).await.unwrap());

        let payment = Payment {
            id: None,
            email: Some(email.clone()),
            amount: Some(9.99),
            transaction_id: Some("pi_test_gold".to_string()),
            extra: Document::new(),
        };
        record_payment(&db, payment).await.unwrap();

        assert!(has_payment(&db, Some(email.clone())).await.unwrap());
        assert!(!has_payment(&db, Some(format!("other-{}", email)))
            .await
            .unwrap());

        db.collection::<Payment>("payment")
            .delete_one(doc! { "email": &email })
            .await
            .unwrap();
    }
}
