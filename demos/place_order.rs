//! Mount the widget, place one order, and print what a UI would render.
//!
//! ```bash
//! FOODFLASH_API_URL=http://localhost:5000 cargo run --example place_order --features native -- 2
//! ```

use std::env;

use foodflash_sdk::prelude::*;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "foodflash_sdk=info".into()),
        )
        .init();

    let base_url = env::var("FOODFLASH_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let user_id = match env::var("FOODFLASH_USER_ID") {
        Ok(raw) => UserId::new(raw.parse()?),
        Err(_) => DEFAULT_USER_ID,
    };
    let vendor_id = match env::args().nth(1) {
        Some(raw) => VendorId::new(raw.parse()?),
        None => VendorId::new(1),
    };

    let client = FoodflashClient::builder()
        .base_url(&base_url)
        .user_id(user_id)
        .build()?;

    client.mount().await;
    let outcome = client.submissions().submit_vendor(vendor_id).await?;
    tracing::info!(?outcome, "Submission finished");

    if let Some(notice) = client.submissions().take_notice().await {
        println!("{}", notice);
    }

    let view = WidgetView::render(client.catalog(), &client.snapshot().await);
    if let Some(banner) = &view.banner {
        println!("! {}", banner);
    }
    for card in &view.vendors {
        println!(
            "{} ({}, {}) [{}]",
            card.name, card.rating, card.delivery, card.button_label
        );
    }
    match view.empty_history {
        Some(text) => println!("{}", text),
        None => {
            for order in &view.orders {
                println!(
                    "{} | {} | {} | {}{}",
                    order.title,
                    order.status,
                    order.total,
                    order.date,
                    order
                        .vendor
                        .as_ref()
                        .map(|v| format!(" | {}", v))
                        .unwrap_or_default()
                );
            }
        }
    }

    Ok(())
}
