use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{
    database::MongoDB,
    models::Payment,
    services::payment_service,
    services::stripe_service::{self, CreatePaymentIntentRequest, PaymentIntentResponse},
};

#[derive(Deserialize)]
pub struct PaymentQuery {
    pub email: Option<String>,
}

#[utoipa::path(
    post,
    path = "/create-payment-intent",
    tag = "Payments",
    request_body = CreatePaymentIntentRequest,
    responses(
        (status = 200, description = "Client secret for Stripe.js", body = PaymentIntentResponse),
        (status = 500, description = "Stripe call failed")
    )
)]
pub async fn create_payment_intent(body: web::Json<CreatePaymentIntentRequest>) -> HttpResponse {
    log::info!("💳 POST /create-payment-intent - price: {}", body.price);

    match stripe_service::create_payment_intent(body.price).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("❌ Failed to create payment intent: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

/// POST /payment - records a completed membership payment.
pub async fn record_payment(db: web::Data<MongoDB>, body: web::Json<Payment>) -> HttpResponse {
    log::info!(
        "💳 POST /payment - email: {}",
        body.email.as_deref().unwrap_or("<none>")
    );

    match payment_service::record_payment(&db, body.into_inner()).await {
        Ok(response) => {
            log::info!("✅ Payment recorded: {:?}", response.inserted_id);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Failed to record payment: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/payment",
    tag = "Payments",
    params(
        ("email" = Option<String>, Query, description = "Account to check")
    ),
    responses(
        (status = 200, description = "Bare boolean, true when the email has a recorded payment"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_payment_status(
    db: web::Data<MongoDB>,
    query: web::Query<PaymentQuery>,
) -> HttpResponse {
    log::info!("🔍 GET /payment - email: {:?}", query.email);

    match payment_service::has_payment(&db, query.into_inner().email).await {
        Ok(exists) => HttpResponse::Ok().json(exists),
        Err(e) => {
            log::error!("❌ Failed payment check: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

/// GET /payments?email= - one account's payment history.
pub async fn get_payments(db: web::Data<MongoDB>, query: web::Query<PaymentQuery>) -> HttpResponse {
    log::info!("📋 GET /payments - email: {:?}", query.email);

    match payment_service::payments_by_email(&db, query.into_inner().email).await {
        Ok(payments) => {
            log::info!("✅ Payments retrieved: {}", payments.len());
            HttpResponse::Ok().json(payments)
        }
        Err(e) => {
            log::error!("❌ Failed to list payments: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}
