use actix_web::{web, HttpResponse};
use mongodb::bson::{oid::ObjectId, Document};

use crate::{database::MongoDB, models::Meal, services::meal_service};

/// POST /meals - publishes a meal to the menu.
pub async fn create_meal(db: web::Data<MongoDB>, body: web::Json<Meal>) -> HttpResponse {
    log::info!(
        "🍽️ POST /meals - title: {}",
        body.title.as_deref().unwrap_or("<untitled>")
    );

    match meal_service::create_meal(&db, body.into_inner()).await {
        Ok(response) => {
            log::info!("✅ Meal created: {:?}", response.inserted_id);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Failed to create meal: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/meals",
    tag = "Meals",
    responses(
        (status = 200, description = "Every meal on the menu"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_meals(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("🍽️ GET /meals - Listing the menu");

    match meal_service::list_meals(&db).await {
        Ok(meals) => {
            log::info!("✅ Meals retrieved: {}", meals.len());
            HttpResponse::Ok().json(meals)
        }
        Err(e) => {
            log::error!("❌ Failed to list meals: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/mealDetails/{id}",
    tag = "Meals",
    params(
        ("id" = String, Path, description = "Meal ObjectId in hex")
    ),
    responses(
        (status = 200, description = "The meal document"),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No meal with that id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_meal_details(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let meal_id = path.into_inner();
    log::info!("🍽️ GET /mealDetails/{}", meal_id);

    let object_id = match ObjectId::parse_str(&meal_id) {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "Invalid meal ID"
            }))
        }
    };

    match meal_service::meal_details(&db, object_id).await {
        Ok(Some(meal)) => HttpResponse::Ok().json(meal),
        Ok(None) => {
            log::warn!("⚠️ Meal {} not found", meal_id);
            HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "error": "Meal not found"
            }))
        }
        Err(e) => {
            log::error!("❌ Failed to fetch meal {}: {}", meal_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

/// PUT /upmeals/{id} - applies a dashboard edit to a published meal.
pub async fn update_meal(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    body: web::Json<Document>,
) -> HttpResponse {
    let meal_id = path.into_inner();
    log::info!("🔧 PUT /upmeals/{}", meal_id);

    let object_id = match ObjectId::parse_str(&meal_id) {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "Invalid meal ID"
            }))
        }
    };

    match meal_service::update_meal(&db, object_id, body.into_inner()).await {
        Ok(response) => {
            if response.matched_count > 0 {
                log::info!("✅ Meal {} updated", meal_id);
            } else {
                log::warn!("⚠️ No meal matched id {}", meal_id);
            }
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Failed to update meal {}: {}", meal_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

/// DELETE /pop/{id} - takes a meal off the menu.
pub async fn delete_meal(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let meal_id = path.into_inner();
    log::info!("🗑️  DELETE /pop/{}", meal_id);

    let object_id = match ObjectId::parse_str(&meal_id) {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "Invalid meal ID"
            }))
        }
    };

    match meal_service::delete_meal(&db, object_id).await {
        Ok(response) => {
            if response.deleted_count > 0 {
                log::info!("✅ Meal {} deleted", meal_id);
            } else {
                log::warn!("⚠️ No meal matched id {}", meal_id);
            }
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Failed to delete meal {}: {}", meal_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

/// POST /upcomings - stages a meal for the coming-soon board.
pub async fn create_upcoming(db: web::Data<MongoDB>, body: web::Json<Meal>) -> HttpResponse {
    log::info!(
        "🍽️ POST /upcomings - title: {}",
        body.title.as_deref().unwrap_or("<untitled>")
    );

    match meal_service::create_upcoming_meal(&db, body.into_inner()).await {
        Ok(response) => {
            log::info!("✅ Upcoming meal created: {:?}", response.inserted_id);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Failed to create upcoming meal: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

/// GET /upcomings - the coming-soon board.
pub async fn get_upcomings(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("🍽️ GET /upcomings");

    match meal_service::list_upcoming_meals(&db).await {
        Ok(meals) => {
            log::info!("✅ Upcoming meals retrieved: {}", meals.len());
            HttpResponse::Ok().json(meals)
        }
        Err(e) => {
            log::error!("❌ Failed to list upcoming meals: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}
