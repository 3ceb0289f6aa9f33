use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "UniDine Service API",
        version = "1.0.0",
        description = "API documentation for the UniDine campus dining backend. \n\n**Features:**\n- User registry with admin promotion\n- Meal menu and upcoming-meal board\n- Reviews and likes per meal\n- Membership packages with Stripe checkout\n- Meal orders and payment history",
        contact(
            name = "UniDine Team",
            email = "support@unidine.app"
        )
    ),
    paths(
        // Health
        crate::api::health::health_check,

        // Users
        crate::api::users::create_user,
        crate::api::users::get_users,
        crate::api::users::check_admin,

        // Meals
        crate::api::meals::get_meals,
        crate::api::meals::get_meal_details,

        // Likes
        crate::api::likes::get_like_count,

        // Membership
        crate::api::membership::get_membership,
        crate::api::membership::checkout,

        // Payments
        crate::api::payments::create_payment_intent,
        crate::api::payments::get_payment_status,
    ),
    components(
        schemas(
            // Health
            crate::api::health::HealthResponse,

            // Write acknowledgements
            crate::models::InsertOneResponse,
            crate::models::UpdateResponse,
            crate::models::DeleteResponse,

            // Users
            crate::models::User,
            crate::services::user_service::AdminCheckResponse,

            // Likes
            crate::services::like_service::LikeCountResponse,

            // Payments
            crate::services::stripe_service::CreatePaymentIntentRequest,
            crate::services::stripe_service::PaymentIntentResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness endpoints for uptime checks."),
        (name = "Users", description = "User registry. Google-login upserts and admin role checks."),
        (name = "Meals", description = "The published menu and per-meal detail pages."),
        (name = "Likes", description = "Per-meal like feed and counters."),
        (name = "Membership", description = "Purchasable membership packages and checkout lookup."),
        (name = "Payments", description = "Stripe payment intents and recorded payment history."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_doc_covers_user_routes() {
        let doc = ApiDoc::openapi();
        let json = doc.to_json().unwrap();

        assert!(json.contains("\"/users\""));
        assert!(json.contains("\"/users/admin/{email}\""));
        assert!(json.contains("#/components/schemas/User"));
        assert!(json.contains("\"insertedId\""));
    }

    #[test]
    fn test_openapi_doc_covers_payment_routes() {
        let doc = ApiDoc::openapi();
        let json = doc.to_json().unwrap();

        assert!(json.contains("\"/create-payment-intent\""));
        assert!(json.contains("\"clientSecret\""));
        assert!(json.contains("\"/likeCount/{mealID}\""));
    }
}
