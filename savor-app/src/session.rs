use std::sync::Arc;

use savor_catalog::MenuItem;
use savor_core::CatalogRepository;
use savor_order::{
    place_order, Cart, CartLineItem, CartTotals, CheckoutDetails, OrderTracker, PlacedOrder,
    PricingRules, TrackingSession,
};
use savor_store::Config;
use serde::Serialize;
use tracing::info;

use crate::error::AppError;

/// Everything the cart drawer and checkout summary render
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartLineItem>,
    pub item_count: u32,
    pub totals: CartTotals,
    pub currency: String,
}

/// One shopper's storefront state, owned by whoever drives the UI.
/// Holds the only cart and at most one running order tracker.
pub struct StorefrontSession {
    catalog: Arc<dyn CatalogRepository>,
    cart: Cart,
    rules: PricingRules,
    tracker: OrderTracker,
    tracking: Option<TrackingSession>,
}

impl StorefrontSession {
    pub fn new(catalog: Arc<dyn CatalogRepository>, rules: PricingRules, tracker: OrderTracker) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            rules,
            tracker,
            tracking: None,
        }
    }

    pub fn from_config(catalog: Arc<dyn CatalogRepository>, config: &Config) -> Self {
        Self::new(
            catalog,
            PricingRules::from(&config.pricing),
            OrderTracker::from(&config.tracking),
        )
    }

    pub fn catalog(&self) -> &dyn CatalogRepository {
        self.catalog.as_ref()
    }

    /// Look up a dish and put one unit of it in the cart
    pub async fn add_to_cart(&mut self, menu_item_id: &str) -> Result<MenuItem, AppError> {
        let item = self.catalog.get_menu_item(menu_item_id).await?;
        self.cart.add_menu_item(&item)?;
        info!(item_id = %item.id, name = %item.name, "added to cart");
        Ok(item)
    }

    pub fn adjust_quantity(&mut self, item_id: &str, delta: i32) {
        self.cart.change_quantity(item_id, delta);
    }

    pub fn remove_item(&mut self, item_id: &str) {
        self.cart.remove_item(item_id);
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.compute_totals(&self.rules)
    }

    pub fn cart_view(&self) -> CartView {
        CartView {
            items: self.cart.items().to_vec(),
            item_count: self.cart.item_count(),
            totals: self.totals(),
            currency: self.rules.currency.clone(),
        }
    }

    /// Place the order and start tracking it. Any previous tracker is
    /// cancelled first. Must be called inside a tokio runtime.
    pub fn checkout(&mut self, details: &CheckoutDetails) -> Result<PlacedOrder, AppError> {
        let order = place_order(&mut self.cart, details, &self.rules)?;

        self.end_tracking();
        self.tracking = Some(self.tracker.start(order.id.clone()));
        Ok(order)
    }

    pub fn tracking(&self) -> Option<&TrackingSession> {
        self.tracking.as_ref()
    }

    /// Tear down the tracking page. Safe to call when nothing is tracked.
    pub fn end_tracking(&mut self) {
        if let Some(mut session) = self.tracking.take() {
            session.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use savor_order::{OrderStatus, PaymentMethod};
    use savor_store::InMemoryCatalog;
    use std::time::Duration;

    fn session() -> StorefrontSession {
        StorefrontSession::new(
            Arc::new(InMemoryCatalog::seeded()),
            PricingRules::new(3.99, 0.08),
            OrderTracker::new(Duration::from_secs(8)),
        )
    }

    fn details() -> CheckoutDetails {
        CheckoutDetails {
            full_name: "Jane Doe".to_string(),
            address: "123 Foodie Lane".to_string(),
            city: "Tastytown".to_string(),
            state: "CA".to_string(),
            zip_code: "90210".to_string(),
            phone: "(123) 456-7890".to_string(),
            payment_method: PaymentMethod::CreditCard,
            promo_code: None,
        }
    }

    #[tokio::test]
    async fn test_add_to_cart() {
        let mut session = session();

        let item = session.add_to_cart("main2").await.unwrap();
        session.add_to_cart("main2").await.unwrap();

        assert_eq!(item.name, "Margherita Pizza");
        let view = session.cart_view();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.item_count, 2);
        assert_eq!(view.totals.subtotal, 29.0);
    }

    #[tokio::test]
    async fn test_add_unknown_item() {
        let mut session = session();

        let result = session.add_to_cart("nope").await;

        assert!(matches!(result, Err(AppError::Catalog(_))));
        assert!(session.cart().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_checkout_starts_tracking() {
        let mut session = session();
        session.add_to_cart("app1").await.unwrap();

        let order = session.checkout(&details()).unwrap();

        assert!(session.cart().is_empty());
        let tracking = session.tracking().unwrap();
        assert_eq!(tracking.order_id(), order.id);
        assert_eq!(tracking.status(), OrderStatus::Confirmed);

        session.end_tracking();
        session.end_tracking();
        assert!(session.tracking().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_checkout_replaces_tracker() {
        let mut session = session();

        session.add_to_cart("app1").await.unwrap();
        session.checkout(&details()).unwrap();
        let mut first = session.tracking().unwrap().subscribe();

        session.add_to_cart("des1").await.unwrap();
        let second = session.checkout(&details()).unwrap();

        // The first tracker stops publishing once replaced
        assert!(first.changed().await.is_err());
        assert_eq!(session.tracking().unwrap().order_id(), second.id);
    }

    #[tokio::test]
    async fn test_failed_checkout_keeps_cart() {
        let mut session = session();
        session.add_to_cart("main1").await.unwrap();

        let mut bad = details();
        bad.address = "x".to_string();

        assert!(session.checkout(&bad).is_err());
        assert_eq!(session.cart().len(), 1);
        assert!(session.tracking().is_none());
    }
}
