use serde::{Deserialize, Serialize};

const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreatePaymentIntentRequest {
    /// Package price in dollars, as shown on the checkout page.
    pub price: f64,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    /// Handed to Stripe.js on the client to confirm the card payment.
    pub client_secret: String,
}

#[derive(Debug, Deserialize)]
struct StripePaymentIntent {
    id: String,
    client_secret: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    #[serde(default)]
    error: Option<StripeErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

/// Dollars to Stripe's integer cents, truncating any sub-cent remainder.
pub(crate) fn to_minor_units(price: f64) -> i64 {
    (price * 100.0) as i64
}

/// Creates a card PaymentIntent for the given package price and returns the
/// client secret the frontend needs to confirm it.
pub async fn create_payment_intent(price: f64) -> Result<PaymentIntentResponse, String> {
    let secret_key = std::env::var("STRIPE_SECRET_KEY")
        .map_err(|_| "STRIPE_SECRET_KEY not configured".to_string())?;

    let amount = to_minor_units(price).to_string();
    log::info!("💳 Creating payment intent for {} cents", amount);

    let url = format!("{}/payment_intents", STRIPE_API_BASE);

    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", secret_key))
        .form(&[
            ("amount", amount.as_str()),
            ("currency", "usd"),
            ("payment_method_types[]", "card"),
        ])
        .timeout(std::time::Duration::from_secs(10))
        .send()
        .await
        .map_err(|e| format!("Failed to reach Stripe: {}", e))?;

    if !response.status().is_success() {
        let status = response.status();
        let detail = response
            .json::<StripeErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .and_then(|error| error.message);

        return Err(match detail {
            Some(message) => format!("Stripe API error: {} - {}", status, message),
            None => format!("Stripe API error: {}", status),
        });
    }

    let intent: StripePaymentIntent = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse Stripe response: {}", e))?;

    log::info!("✅ Payment intent created: {}", intent.id);

    Ok(PaymentIntentResponse {
        client_secret: intent.client_secret,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_minor_units_whole_dollars() {
        assert_eq!(to_minor_units(15.0), 1500);
    }

    #[test]
    fn test_to_minor_units_cents() {
        assert_eq!(to_minor_units(12.5), 1250);
        assert_eq!(to_minor_units(9.99), 999); // 9.99 * 100.0 is exactly 999.0 in f64
    }

    #[test]
    fn test_to_minor_units_truncates_sub_cent() {
        assert_eq!(to_minor_units(19.99), 1998); // 19.99 * 100.0 is 1998.9999... in f64
        assert_eq!(to_minor_units(10.999), 1099);
        assert_eq!(to_minor_units(0.0), 0);
    }

    #[tokio::test]
    #[ignore] // Requires a STRIPE_SECRET_KEY test key in the environment
    async fn test_create_payment_intent_live() {
        dotenv::dotenv().ok();
        let result = create_payment_intent(19.99).await;
        match result {
            Ok(intent) => assert!(!intent.client_secret.is_empty()),
            Err(e) => panic!("Stripe call failed: {}", e),
        }
    }
}
