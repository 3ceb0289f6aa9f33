use actix_web::{web, HttpResponse};
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;

use crate::{database::MongoDB, models::Order, services::order_service};

#[derive(Deserialize)]
pub struct OrderListQuery {
    pub email: Option<String>,
}

/// POST /orders - places a meal order.
pub async fn create_order(db: web::Data<MongoDB>, body: web::Json<Order>) -> HttpResponse {
    log::info!(
        "📝 POST /orders - meal: {}, email: {}",
        body.meal_id.as_deref().unwrap_or("<none>"),
        body.email.as_deref().unwrap_or("<none>")
    );

    match order_service::place_order(&db, body.into_inner()).await {
        Ok(response) => {
            log::info!("✅ Order placed: {:?}", response.inserted_id);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Failed to place order: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

/// GET /orders?email= - one account's order history.
pub async fn get_orders(db: web::Data<MongoDB>, query: web::Query<OrderListQuery>) -> HttpResponse {
    log::info!("📋 GET /orders - email: {:?}", query.email);

    match order_service::orders_by_email(&db, query.into_inner().email).await {
        Ok(orders) => {
            log::info!("✅ Orders retrieved: {}", orders.len());
            HttpResponse::Ok().json(orders)
        }
        Err(e) => {
            log::error!("❌ Failed to list orders: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

/// PUT /orders/{id} - the kitchen marks an order delivered.
pub async fn deliver_order(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let order_id = path.into_inner();
    log::info!("🔧 PUT /orders/{}", order_id);

    let object_id = match ObjectId::parse_str(&order_id) {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "Invalid order ID"
            }))
        }
    };

    match order_service::mark_order_delivered(&db, object_id).await {
        Ok(response) => {
            if response.matched_count > 0 {
                log::info!("✅ Order {} marked delivered", order_id);
            } else {
                log::warn!("⚠️ No order matched id {}", order_id);
            }
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Failed to update order {}: {}", order_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

/// DELETE /cancel/{id} - cancels an order outright.
pub async fn cancel_order(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let order_id = path.into_inner();
    log::info!("🗑️  DELETE /cancel/{}", order_id);

    let object_id = match ObjectId::parse_str(&order_id) {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "Invalid order ID"
            }))
        }
    };

    match order_service::cancel_order(&db, object_id).await {
        Ok(response) => {
            if response.deleted_count > 0 {
                log::info!("✅ Order {} cancelled", order_id);
            } else {
                log::warn!("⚠️ No order matched id {}", order_id);
            }
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Failed to cancel order {}: {}", order_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}
