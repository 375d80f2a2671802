use savor_core::CoreError;
use savor_order::{CartError, CheckoutError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CoreError),
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

impl AppError {
    /// Text safe to show in a toast. Internal failures are logged and masked.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Catalog(CoreError::NotFound(what)) => format!("We couldn't find {}.", what),
            AppError::Catalog(CoreError::ValidationError(msg)) => msg.clone(),
            AppError::Catalog(CoreError::InternalError(msg)) => {
                tracing::error!("Internal catalog error: {}", msg);
                "Something went wrong, please try again.".to_string()
            }
            AppError::Cart(err) => err.to_string(),
            AppError::Checkout(CheckoutError::EmptyCart) => {
                "Your cart is empty. Add items from the menu to get started.".to_string()
            }
            AppError::Checkout(CheckoutError::InvalidDetails(errors)) => errors
                .iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}
