use crate::cart::Cart;
use crate::models::CartLineItem;
use crate::pricing::{CartTotals, PricingRules};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    Paypal,
}

/// Delivery and payment details entered on the checkout page
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CheckoutDetails {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub promo_code: Option<String>,
}

/// One rejected checkout field
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl CheckoutDetails {
    /// Check every field and report all problems at once
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let rules: [(&'static str, &str, usize, &'static str); 6] = [
            ("full_name", self.full_name.as_str(), 2, "Full name must be at least 2 characters."),
            ("address", self.address.as_str(), 5, "Please enter a valid address."),
            ("city", self.city.as_str(), 2, "Please enter a valid city."),
            ("state", self.state.as_str(), 2, "Please enter a valid state."),
            ("zip_code", self.zip_code.as_str(), 5, "Please enter a valid ZIP code."),
            ("phone", self.phone.as_str(), 10, "Please enter a valid phone number."),
        ];

        let errors: Vec<FieldError> = rules
            .into_iter()
            .filter(|(_, value, min, _)| value.trim().chars().count() < *min)
            .map(|(field, _, _, message)| FieldError { field, message })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn normalized_promo_code(&self) -> Option<String> {
        self.promo_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_uppercase)
    }
}

/// Receipt of a simulated checkout
#[derive(Debug, Clone, Serialize)]
pub struct PlacedOrder {
    pub id: String,
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
    pub currency: String,
    pub payment_method: PaymentMethod,
    /// Recorded as entered; no discount is applied
    pub promo_code: Option<String>,
    pub placed_at: DateTime<Utc>,
}

/// Turn the cart into an order. The cart is only cleared on success.
pub fn place_order(
    cart: &mut Cart,
    details: &CheckoutDetails,
    rules: &PricingRules,
) -> Result<PlacedOrder, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    details.validate().map_err(CheckoutError::InvalidDetails)?;

    let order = PlacedOrder {
        id: new_order_id(),
        items: cart.items().to_vec(),
        totals: cart.compute_totals(rules),
        currency: rules.currency.clone(),
        payment_method: details.payment_method,
        promo_code: details.normalized_promo_code(),
        placed_at: Utc::now(),
    };
    cart.clear();

    info!(
        order_id = %order.id,
        lines = order.items.len(),
        total = order.totals.total,
        payment_method = ?order.payment_method,
        "order placed"
    );
    Ok(order)
}

/// Short display id such as `FP-1A2B3C`
fn new_order_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("FP-{}", hex[..6].to_uppercase())
}

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    #[error("Invalid checkout details: {}", join_errors(.0))]
    InvalidDetails(Vec<FieldError>),
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_details() -> CheckoutDetails {
        CheckoutDetails {
            full_name: "Jane Doe".to_string(),
            address: "123 Foodie Lane".to_string(),
            city: "Tastytown".to_string(),
            state: "CA".to_string(),
            zip_code: "90210".to_string(),
            phone: "1234567890".to_string(),
            payment_method: PaymentMethod::Paypal,
            promo_code: Some("  save10 ".to_string()),
        }
    }

    fn filled_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item("main1", "Spaghetti Carbonara", 16.99, None).unwrap();
        cart.add_item("des1", "Tiramisu", 9.00, None).unwrap();
        cart
    }

    #[test]
    fn test_place_order() {
        let rules = PricingRules::new(3.99, 0.08);
        let mut cart = filled_cart();
        let expected_totals = cart.compute_totals(&rules);

        let order = place_order(&mut cart, &valid_details(), &rules).unwrap();

        assert!(cart.is_empty());
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.totals, expected_totals);
        assert_eq!(order.payment_method, PaymentMethod::Paypal);
        assert_eq!(order.promo_code.as_deref(), Some("SAVE10"));
        assert!(order.id.starts_with("FP-"));
        assert_eq!(order.id.len(), 9);
    }

    #[test]
    fn test_empty_cart_rejected() {
        let mut cart = Cart::new();
        let result = place_order(&mut cart, &valid_details(), &PricingRules::default());

        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
    }

    #[test]
    fn test_invalid_details_keep_cart() {
        let mut cart = filled_cart();
        let mut details = valid_details();
        details.zip_code = "123".to_string();
        details.phone = "555".to_string();

        let result = place_order(&mut cart, &details, &PricingRules::default());

        match result {
            Err(CheckoutError::InvalidDetails(errors)) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
                assert_eq!(fields, vec!["zip_code", "phone"]);
            }
            other => panic!("expected invalid details, got {:?}", other),
        }
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_whitespace_only_fields_fail() {
        let mut details = valid_details();
        details.full_name = "   ".to_string();

        let errors = details.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "full_name");
    }

    #[test]
    fn test_blank_promo_code_dropped() {
        let mut details = valid_details();
        details.promo_code = Some("   ".to_string());

        assert_eq!(details.normalized_promo_code(), None);
    }

    #[test]
    fn test_payment_method_serialization() {
        let json = serde_json::to_string(&PaymentMethod::CreditCard).unwrap();
        assert_eq!(json, "\"credit-card\"");
    }
}
