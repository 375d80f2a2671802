pub mod models;
pub mod pricing;
pub mod cart;
pub mod tracking;
pub mod checkout;

pub use models::{CartLineItem, OrderStatus, StepState};
pub use pricing::{CartTotals, PricingRules};
pub use cart::{Cart, CartError};
pub use tracking::{OrderTracker, TrackingSession, TrackingSnapshot};
pub use checkout::{place_order, CheckoutDetails, CheckoutError, FieldError, PaymentMethod, PlacedOrder};
