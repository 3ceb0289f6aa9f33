use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{
    database::MongoDB,
    models::Like,
    services::like_service::{self, LikeCountResponse},
};

/// The frontend asks with ?email=&id=, where id is the meal being viewed.
#[derive(Deserialize)]
pub struct LikeStatusQuery {
    pub email: Option<String>,
    pub id: Option<String>,
}

/// POST /likes - records that a user liked a meal.
pub async fn create_like(db: web::Data<MongoDB>, body: web::Json<Like>) -> HttpResponse {
    log::info!(
        "❤️ POST /likes - meal: {}, email: {}",
        body.meal_id.as_deref().unwrap_or("<none>"),
        body.email.as_deref().unwrap_or("<none>")
    );

    match like_service::create_like(&db, body.into_inner()).await {
        Ok(response) => {
            log::info!("✅ Like created: {:?}", response.inserted_id);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Failed to create like: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

/// GET /likes?email=&id= - did this user like this meal. Empty array means no.
pub async fn get_likes(db: web::Data<MongoDB>, query: web::Query<LikeStatusQuery>) -> HttpResponse {
    log::info!("❤️ GET /likes - email: {:?}, meal: {:?}", query.email, query.id);

    let query = query.into_inner();
    match like_service::find_likes(&db, query.email, query.id).await {
        Ok(likes) => HttpResponse::Ok().json(likes),
        Err(e) => {
            log::error!("❌ Failed to look up likes: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

/// GET /likes/{mealID} - every like on one meal.
pub async fn get_meal_likes(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let meal_id = path.into_inner();
    log::info!("❤️ GET /likes/{}", meal_id);

    match like_service::likes_for_meal(&db, &meal_id).await {
        Ok(likes) => {
            log::info!("✅ Likes retrieved for meal {}: {}", meal_id, likes.len());
            HttpResponse::Ok().json(likes)
        }
        Err(e) => {
            log::error!("❌ Failed to list likes for meal {}: {}", meal_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

/// GET /samelikes/{mealID} - the emails of everyone who liked this meal.
pub async fn get_same_likes(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let meal_id = path.into_inner();
    log::info!("❤️ GET /samelikes/{}", meal_id);

    match like_service::same_likes(&db, &meal_id).await {
        Ok(emails) => HttpResponse::Ok().json(emails),
        Err(e) => {
            log::error!("❌ Failed to list likers for meal {}: {}", meal_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/likeCount/{mealID}",
    tag = "Likes",
    params(
        ("mealID" = String, Path, description = "Meal id the likes point at")
    ),
    responses(
        (status = 200, description = "Number of likes on the meal", body = LikeCountResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_like_count(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let meal_id = path.into_inner();
    log::info!("❤️ GET /likeCount/{}", meal_id);

    match like_service::like_count(&db, &meal_id).await {
        Ok(count) => HttpResponse::Ok().json(LikeCountResponse { count }),
        Err(e) => {
            log::error!("❌ Failed to count likes for meal {}: {}", meal_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}
