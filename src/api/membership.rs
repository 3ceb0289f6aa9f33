use actix_web::{web, HttpResponse};

use crate::{database::MongoDB, services::membership_service};

#[utoipa::path(
    get,
    path = "/membership",
    tag = "Membership",
    responses(
        (status = 200, description = "All purchasable membership packages"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_membership(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("📋 GET /membership - Listing packages");

    match membership_service::list_packages(&db).await {
        Ok(packages) => {
            log::info!("✅ Membership packages retrieved: {}", packages.len());
            HttpResponse::Ok().json(packages)
        }
        Err(e) => {
            log::error!("❌ Failed to list membership packages: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/checkout/{name}",
    tag = "Membership",
    params(
        ("name" = String, Path, description = "Package display name, e.g. Gold")
    ),
    responses(
        (status = 200, description = "Packages with that name, empty if unknown"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn checkout(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let name = path.into_inner();
    log::info!("💳 GET /checkout/{}", name);

    match membership_service::checkout_package(&db, &name).await {
        Ok(packages) => {
            if packages.is_empty() {
                log::warn!("⚠️ No membership package named {}", name);
            }
            HttpResponse::Ok().json(packages)
        }
        Err(e) => {
            log::error!("❌ Failed checkout lookup for {}: {}", name, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}
