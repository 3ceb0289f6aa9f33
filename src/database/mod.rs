use mongodb::{Client, Collection, Database};
use std::error::Error;

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool shared by every route handler
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        // Extract database name from URI or use default
        let db_name = uri
            .split('/')
            .last()
            .and_then(|s| s.split('?').next())
            .filter(|s| !s.is_empty())
            .unwrap_or("UniDineDB");

        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { client, db };

        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates the lookup indexes the route handlers rely on.
    /// `users.email` must stay unique; the POST /users duplicate check depends on it.
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        use mongodb::bson::doc;
        use mongodb::options::IndexOptions;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        let users = self
            .database()
            .collection::<mongodb::bson::Document>("users");

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match users.create_index(email_index).await {
            Ok(_) => log::info!("   ✅ Index created: users(email) [unique]"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // Meal-scoped lookups: reviews(mealID), likes(mealID)
        for collection_name in ["reviews", "likes"] {
            let collection = self
                .database()
                .collection::<mongodb::bson::Document>(collection_name);

            let meal_index = IndexModel::builder().keys(doc! { "mealID": 1 }).build();

            match collection.create_index(meal_index).await {
                Ok(_) => log::info!("   ✅ Index created: {}(mealID)", collection_name),
                Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
            }
        }

        // Email-scoped lookups: payment(email), orders(email)
        for collection_name in ["payment", "orders"] {
            let collection = self
                .database()
                .collection::<mongodb::bson::Document>(collection_name);

            let email_index = IndexModel::builder().keys(doc! { "email": 1 }).build();

            match collection.create_index(email_index).await {
                Ok(_) => log::info!("   ✅ Index created: {}(email)", collection_name),
                Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
            }
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_connection() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/UniDineDB".to_string());

        let db = MongoDB::new(&uri).await;
        assert!(db.is_ok());
    }
}
