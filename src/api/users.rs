use actix_web::{web, HttpResponse};
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;

use crate::{
    database::MongoDB,
    models::{InsertOneResponse, User},
    services::user_service::{self, AdminCheckResponse},
};

#[derive(Deserialize)]
pub struct UserListQuery {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 200, description = "Inserted id, or the already-registered marker", body = InsertOneResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_user(db: web::Data<MongoDB>, body: web::Json<User>) -> HttpResponse {
    log::info!(
        "📝 POST /users - email: {}",
        body.email.as_deref().unwrap_or("<none>")
    );

    match user_service::create_user(&db, body.into_inner()).await {
        Ok(response) => {
            if response.inserted_id.is_some() {
                log::info!("✅ User registered");
            } else {
                log::warn!("⚠️ User already exists, skipping insert");
            }
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Failed to create user: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(
        ("email" = Option<String>, Query, description = "Filter by exact email"),
        ("name" = Option<String>, Query, description = "Filter by exact name")
    ),
    responses(
        (status = 200, description = "Matching users"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_users(db: web::Data<MongoDB>, query: web::Query<UserListQuery>) -> HttpResponse {
    log::info!(
        "📋 GET /users - email: {:?}, name: {:?}",
        query.email,
        query.name
    );

    match user_service::find_users(&db, query.email.as_deref(), query.name.as_deref()).await {
        Ok(users) => {
            log::info!("✅ Users retrieved: {}", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Failed to list users: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

/// PATCH /users/admin/{id} - promotes a user to admin.
pub async fn make_admin(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let user_id = path.into_inner();
    log::info!("🔧 PATCH /users/admin/{}", user_id);

    let object_id = match ObjectId::parse_str(&user_id) {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "Invalid user ID"
            }))
        }
    };

    match user_service::make_admin(&db, object_id).await {
        Ok(response) => {
            if response.matched_count > 0 {
                log::info!("✅ User {} promoted to admin", user_id);
            } else {
                log::warn!("⚠️ No user matched id {}", user_id);
            }
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Failed to promote user {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    tag = "Users",
    params(
        ("email" = String, Path, description = "Email to check")
    ),
    responses(
        (status = 200, description = "Whether the account has the admin role", body = AdminCheckResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn check_admin(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let email = path.into_inner();
    log::info!("🔍 GET /users/admin/{}", email);

    match user_service::is_admin(&db, &email).await {
        Ok(admin) => HttpResponse::Ok().json(AdminCheckResponse { admin }),
        Err(e) => {
            log::error!("❌ Failed admin check for {}: {}", email, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}
