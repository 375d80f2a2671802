use std::sync::Arc;

use anyhow::Context;
use savor_app::StorefrontSession;
use savor_catalog::group_by_category;
use savor_order::{CheckoutDetails, PaymentMethod};
use savor_store::{Config, InMemoryCatalog};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEMO_RESTAURANT: &str = "the-golden-spoon";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "savor_app=debug,savor_order=debug,savor_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Falling back to default config: {}", e);
            Config::default()
        }
    };
    tracing::info!(
        delivery_fee = config.pricing.delivery_fee,
        tax_rate = config.pricing.tax_rate,
        status_interval_secs = config.tracking.status_interval_secs,
        "Starting Savor storefront demo"
    );

    let mut session = StorefrontSession::from_config(Arc::new(InMemoryCatalog::seeded()), &config);

    // Browse
    let restaurants = session.catalog().list_restaurants().await?;
    for r in &restaurants {
        println!("{:<18} {:<11} {:.1}★  {} min", r.name, r.cuisine, r.rating, r.delivery_time_minutes);
    }

    let menu = session.catalog().menu_for(DEMO_RESTAURANT).await?;
    for (category, items) in group_by_category(&menu) {
        println!("\n{}", category.label());
        for item in items {
            println!("  [{}] {:<22} ${:.2}", item.id, item.name, item.price);
        }
    }

    // Fill the cart
    for id in ["main2", "app1", "app1", "des1"] {
        let item = session.add_to_cart(id).await?;
        tracing::info!("{} has been successfully added.", item.name);
    }
    session.adjust_quantity("app1", -1);
    session.remove_item("des1");
    println!("\n{}", serde_json::to_string_pretty(&session.cart_view())?);

    // Checkout
    let details = CheckoutDetails {
        full_name: "John Doe".to_string(),
        address: "123 Foodie Lane".to_string(),
        city: "Tastytown".to_string(),
        state: "CA".to_string(),
        zip_code: "90210".to_string(),
        phone: "(123) 456-7890".to_string(),
        payment_method: PaymentMethod::CreditCard,
        promo_code: None,
    };
    let order = match session.checkout(&details) {
        Ok(order) => order,
        Err(e) => {
            tracing::error!("Checkout failed: {}", e.user_message());
            return Err(e).context("checkout");
        }
    };
    println!("\n{}", serde_json::to_string_pretty(&order)?);

    // Track until delivered
    let tracking = session.tracking().context("tracking session missing after checkout")?;
    let mut updates = tracking.subscribe();
    println!("\n{}", serde_json::to_string(&*updates.borrow_and_update())?);
    while updates.changed().await.is_ok() {
        let snapshot = *updates.borrow_and_update();
        println!("{} ({}%)", snapshot.status.label(), snapshot.progress);
    }

    session.end_tracking();
    tracing::info!("Order {} delivered", order.id);
    Ok(())
}
