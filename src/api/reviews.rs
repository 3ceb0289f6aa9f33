use actix_web::{web, HttpResponse};
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;

use crate::{
    database::MongoDB,
    models::{Review, ReviewUpdateRequest},
    services::review_service,
};

#[derive(Deserialize)]
pub struct ReviewListQuery {
    pub email: Option<String>,
}

/// POST /reviews - stores a diner's review of a meal.
pub async fn create_review(db: web::Data<MongoDB>, body: web::Json<Review>) -> HttpResponse {
    log::info!(
        "📝 POST /reviews - meal: {}, email: {}",
        body.meal_id.as_deref().unwrap_or("<none>"),
        body.email.as_deref().unwrap_or("<none>")
    );

    match review_service::create_review(&db, body.into_inner()).await {
        Ok(response) => {
            log::info!("✅ Review created: {:?}", response.inserted_id);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Failed to create review: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

/// GET /reviews?email= - one account's review history.
pub async fn get_reviews(
    db: web::Data<MongoDB>,
    query: web::Query<ReviewListQuery>,
) -> HttpResponse {
    log::info!("📋 GET /reviews - email: {:?}", query.email);

    match review_service::reviews_by_email(&db, query.into_inner().email).await {
        Ok(reviews) => {
            log::info!("✅ Reviews retrieved: {}", reviews.len());
            HttpResponse::Ok().json(reviews)
        }
        Err(e) => {
            log::error!("❌ Failed to list reviews: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

/// GET /reviews/{mealID} - every review left on one meal.
pub async fn get_meal_reviews(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let meal_id = path.into_inner();
    log::info!("📋 GET /reviews/{}", meal_id);

    match review_service::reviews_for_meal(&db, &meal_id).await {
        Ok(reviews) => {
            log::info!("✅ Reviews retrieved for meal {}: {}", meal_id, reviews.len());
            HttpResponse::Ok().json(reviews)
        }
        Err(e) => {
            log::error!("❌ Failed to list reviews for meal {}: {}", meal_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

/// PUT /reviews/{id} - edits the text of an existing review.
pub async fn update_review(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    body: web::Json<ReviewUpdateRequest>,
) -> HttpResponse {
    let review_id = path.into_inner();
    log::info!("🔧 PUT /reviews/{}", review_id);

    let object_id = match ObjectId::parse_str(&review_id) {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "Invalid review ID"
            }))
        }
    };

    match review_service::update_review(&db, object_id, &body.review).await {
        Ok(response) => {
            log::info!("✅ Review {} updated", review_id);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Failed to update review {}: {}", review_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

/// DELETE /delete/{id} - removes a review.
pub async fn delete_review(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let review_id = path.into_inner();
    log::info!("🗑️  DELETE /delete/{}", review_id);

    let object_id = match ObjectId::parse_str(&review_id) {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "Invalid review ID"
            }))
        }
    };

    match review_service::delete_review(&db, object_id).await {
        Ok(response) => {
            if response.deleted_count > 0 {
                log::info!("✅ Review {} deleted", review_id);
            } else {
                log::warn!("⚠️ No review matched id {}", review_id);
            }
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Failed to delete review {}: {}", review_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}
