use crate::models::CartLineItem;
use crate::pricing::{CartTotals, PricingRules};
use savor_catalog::MenuItem;
use serde::Serialize;
use tracing::debug;

/// The customer's cart for one storefront session.
///
/// Totals are never cached: `subtotal` and `compute_totals` fold over the
/// current line items on every call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from existing lines. Lines with a zero quantity are dropped.
    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        let mut cart = Self { items };
        cart.drop_empty_lines();
        cart
    }

    /// Add one unit of a product. A product already in the cart gets its
    /// quantity bumped instead of a second line.
    pub fn add_item(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: f64,
        image_ref: Option<String>,
    ) -> Result<(), CartError> {
        let id = id.into();
        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(CartError::InvalidPrice { id, price: unit_price });
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == id) {
            existing.quantity = existing.quantity.saturating_add(1);
            debug!(item_id = %id, quantity = existing.quantity, "cart item incremented");
            return Ok(());
        }

        debug!(item_id = %id, unit_price, "cart item added");
        self.items.push(CartLineItem::new(id, name.into(), unit_price, image_ref));
        Ok(())
    }

    pub fn add_menu_item(&mut self, item: &MenuItem) -> Result<(), CartError> {
        self.add_item(item.id.clone(), item.name.clone(), item.price, item.image_url.clone())
    }

    /// Shift a line's quantity by `delta`, never below 1. Unknown ids are ignored.
    pub fn change_quantity(&mut self, item_id: &str, delta: i32) {
        let Some(item) = self.items.iter_mut().find(|i| i.id == item_id) else {
            return;
        };

        let next = (i64::from(item.quantity) + i64::from(delta)).max(1);
        item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        debug!(item_id, delta, quantity = item.quantity, "cart quantity changed");

        self.drop_empty_lines();
    }

    /// Remove a line. Unknown ids are ignored.
    pub fn remove_item(&mut self, item_id: &str) {
        let before = self.items.len();
        self.items.retain(|i| i.id != item_id);
        if self.items.len() != before {
            debug!(item_id, "cart item removed");
        }
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, item_id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of units across all lines, for the cart badge
    pub fn item_count(&self) -> u32 {
        self.items.iter().fold(0u32, |acc, i| acc.saturating_add(i.quantity))
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    pub fn compute_totals(&self, rules: &PricingRules) -> CartTotals {
        rules.totals_for(self.subtotal())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn drop_empty_lines(&mut self) {
        self.items.retain(|i| i.quantity > 0);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("Invalid price {price} for item {id}")]
    InvalidPrice { id: String, price: f64 },
}
