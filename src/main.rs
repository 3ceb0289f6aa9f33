mod api;
mod database;
mod models;
mod seeds;
mod services;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    log::info!("🚀 Starting UniDine Service...");
    log::info!("📊 Database: {}", database_url);

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&database_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db.clone());

    log::info!("✅ MongoDB connected successfully");

    // 🌱 Seed default membership packages
    seeds::membership_seed::seed_default_packages(&db).await;

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:5173") // Vite dev server
            .allowed_origin("http://127.0.0.1:5173")
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .supports_credentials()
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone())
            )
            // Health
            .route("/", web::get().to(api::health::root))
            .route("/health", web::get().to(api::health::health_check))
            // Users
            .route("/users", web::post().to(api::users::create_user))
            .route("/users", web::get().to(api::users::get_users))
            .route("/users/admin/{id}", web::patch().to(api::users::make_admin))
            .route("/users/admin/{email}", web::get().to(api::users::check_admin))
            // Meals
            .route("/meals", web::post().to(api::meals::create_meal))
            .route("/meals", web::get().to(api::meals::get_meals))
            .route("/mealDetails/{id}", web::get().to(api::meals::get_meal_details))
            .route("/upmeals/{id}", web::put().to(api::meals::update_meal))
            .route("/pop/{id}", web::delete().to(api::meals::delete_meal))
            .route("/upcomings", web::post().to(api::meals::create_upcoming))
            .route("/upcomings", web::get().to(api::meals::get_upcomings))
            // Reviews
            .route("/reviews", web::post().to(api::reviews::create_review))
            .route("/reviews", web::get().to(api::reviews::get_reviews))
            .route("/reviews/{mealID}", web::get().to(api::reviews::get_meal_reviews))
            .route("/reviews/{id}", web::put().to(api::reviews::update_review))
            .route("/delete/{id}", web::delete().to(api::reviews::delete_review))
            // Likes
            .route("/likes", web::post().to(api::likes::create_like))
            .route("/likes", web::get().to(api::likes::get_likes))
            .route("/likes/{mealID}", web::get().to(api::likes::get_meal_likes))
            .route("/samelikes/{mealID}", web::get().to(api::likes::get_same_likes))
            .route("/likeCount/{mealID}", web::get().to(api::likes::get_like_count))
            // Membership
            .route("/membership", web::get().to(api::membership::get_membership))
            .route("/checkout/{name}", web::get().to(api::membership::checkout))
            // Payments
            .route("/create-payment-intent", web::post().to(api::payments::create_payment_intent))
            .route("/payment", web::post().to(api::payments::record_payment))
            .route("/payment", web::get().to(api::payments::get_payment_status))
            .route("/payments", web::get().to(api::payments::get_payments))
            // Orders
            .route("/orders", web::post().to(api::orders::create_order))
            .route("/orders", web::get().to(api::orders::get_orders))
            .route("/orders/{id}", web::put().to(api::orders::deliver_order))
            .route("/cancel/{id}", web::delete().to(api::orders::cancel_order))
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
