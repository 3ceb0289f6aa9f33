use crate::{database::MongoDB, models::MembershipPackage};
use futures::stream::StreamExt;
use mongodb::bson::{doc, Document};

pub async fn list_packages(db: &MongoDB) -> Result<Vec<MembershipPackage>, String> {
    find_packages(db, doc! {}).await
}

/// The checkout page fetches the chosen package by its display name.
/// Kept as an array lookup so an unknown name is an empty list, not a 404.
pub async fn checkout_package(db: &MongoDB, name: &str) -> Result<Vec<MembershipPackage>, String> {
    find_packages(db, doc! { "name": name }).await
}

async fn find_packages(db: &MongoDB, filter: Document) -> Result<Vec<MembershipPackage>, String> {
    let collection = db.collection::<MembershipPackage>("membership");

    let mut cursor = collection
        .find(filter)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut packages = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(package) => packages.push(package),
            Err(e) => log::error!("Error deserializing membership package: {}", e),
        }
    }

    Ok(packages)
}
