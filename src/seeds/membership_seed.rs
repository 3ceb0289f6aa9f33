use crate::database::MongoDB;
use crate::models::MembershipPackage;
use mongodb::bson::{doc, Document};

/// Seeds the three standard membership packages.
/// Only runs against an empty collection, so hand-edited packages survive restarts.
pub async fn seed_default_packages(db: &MongoDB) {
    let collection = db.collection::<MembershipPackage>("membership");

    let count = collection.count_documents(doc! {}).await.unwrap_or(0);
    if count > 0 {
        log::info!(
            "📋 Membership packages: {} already in DB, skipping seed",
            count
        );
        return;
    }

    log::info!("📋 Membership packages: seeding default packages into MongoDB...");

    let packages = build_default_packages();

    match collection.insert_many(&packages).await {
        Ok(result) => {
            log::info!(
                "   ✅ Inserted {} membership packages",
                result.inserted_ids.len()
            );
        }
        Err(e) => {
            log::error!("   ❌ Failed to seed membership packages: {}", e);
        }
    }
}

fn build_default_packages() -> Vec<MembershipPackage> {
    vec![
        MembershipPackage {
            id: None,
            name: Some("Silver".to_string()),
            price: Some(9.99),
            benefits: Some(vec![
                "Early access to the daily menu".to_string(),
                "One free drink refill per order".to_string(),
            ]),
            extra: Document::new(),
        },
        MembershipPackage {
            id: None,
            name: Some("Gold".to_string()),
            price: Some(19.99),
            benefits: Some(vec![
                "Everything in Silver".to_string(),
                "Priority pickup queue".to_string(),
                "10% off every order".to_string(),
            ]),
            extra: Document::new(),
        },
        MembershipPackage {
            id: None,
            name: Some("Platinum".to_string()),
            price: Some(29.99),
            benefits: Some(vec![
                "Everything in Gold".to_string(),
                "Free delivery to dorms".to_string(),
                "Invite to monthly tasting events".to_string(),
            ]),
            extra: Document::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_packages_cover_the_three_tiers() {
        let packages = build_default_packages();
        let names: Vec<_> = packages
            .iter()
            .filter_map(|p| p.name.as_deref())
            .collect();

        assert_eq!(names, vec!["Silver", "Gold", "Platinum"]);
    }

    #[test]
    fn test_default_packages_prices_ascend() {
        let packages = build_default_packages();
        let prices: Vec<_> = packages.iter().filter_map(|p| p.price).collect();

        assert_eq!(prices.len(), 3);
        assert!(prices.windows(2).all(|w| w[0] < w[1]));
    }
}
