use serde::{Deserialize, Serialize};

/// Delivery progress of a placed order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Confirmed,
    Preparing,
    Delivery,
    Delivered,
}

/// How one stepper entry renders relative to the current status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

impl OrderStatus {
    /// Every status in the order it is reached
    pub const SEQUENCE: [OrderStatus; 4] = [
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Delivery,
        OrderStatus::Delivered,
    ];

    pub fn index(self) -> usize {
        match self {
            OrderStatus::Confirmed => 0,
            OrderStatus::Preparing => 1,
            OrderStatus::Delivery => 2,
            OrderStatus::Delivered => 3,
        }
    }

    /// The following stage, `None` once delivered
    pub fn next(self) -> Option<OrderStatus> {
        Self::SEQUENCE.get(self.index() + 1).copied()
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Percentage shown on the progress bar
    pub fn progress(self) -> u8 {
        match self {
            OrderStatus::Confirmed => 10,
            OrderStatus::Preparing => 40,
            OrderStatus::Delivery => 75,
            OrderStatus::Delivered => 100,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "Order Confirmed",
            OrderStatus::Preparing => "Preparing Food",
            OrderStatus::Delivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// State of `step` in a stepper whose current position is `self`
    pub fn step_state(self, step: OrderStatus) -> StepState {
        match step.index().cmp(&self.index()) {
            std::cmp::Ordering::Less => StepState::Completed,
            std::cmp::Ordering::Equal => StepState::Active,
            std::cmp::Ordering::Greater => StepState::Pending,
        }
    }
}

/// One product entry in the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    pub id: String,
    pub name: String,
    pub unit_price: f64,
    /// Always >= 1 while the item is in a cart
    pub quantity: u32,
    pub image_ref: Option<String>,
}

impl CartLineItem {
    pub fn new(id: String, name: String, unit_price: f64, image_ref: Option<String>) -> Self {
        Self {
            id,
            name,
            unit_price,
            quantity: 1,
            image_ref,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_sequence() {
        let mut walked = vec![OrderStatus::default()];
        while let Some(next) = walked.last().and_then(|s| s.next()) {
            walked.push(next);
        }

        assert_eq!(walked, OrderStatus::SEQUENCE.to_vec());
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(!OrderStatus::Delivery.is_terminal());
    }

    #[test]
    fn test_progress_values() {
        let progress: Vec<u8> = OrderStatus::SEQUENCE.iter().map(|s| s.progress()).collect();
        assert_eq!(progress, vec![10, 40, 75, 100]);
    }

    #[test]
    fn test_step_state() {
        let current = OrderStatus::Delivery;
        assert_eq!(current.step_state(OrderStatus::Confirmed), StepState::Completed);
        assert_eq!(current.step_state(OrderStatus::Delivery), StepState::Active);
        assert_eq!(current.step_state(OrderStatus::Delivered), StepState::Pending);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&OrderStatus::Delivery).unwrap();
        assert_eq!(json, "\"delivery\"");

        let parsed: OrderStatus = serde_json::from_str("\"preparing\"").unwrap();
        assert_eq!(parsed, OrderStatus::Preparing);
    }
}
