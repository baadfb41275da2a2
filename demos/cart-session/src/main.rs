//! # Cart Session Demo
//!
//! Drives the storefront client against a running backend the way a shopper
//! would: add a product, fiddle with the quantity spinner, type a search.
//!
//! ```sh
//! TIENDA_BASE_URL=http://localhost:5000 RUST_LOG=debug cargo run -p cart-session-demo
//! ```

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tienda_client::{format, CartClient, ClientConfig, SearchClient, SearchResults, TracingNotifier};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

// ============================================================================
// Results panel
// ============================================================================

struct LoggedResults;

impl SearchResults for LoggedResults {
    fn show(&self, html: String) {
        info!(bytes = html.len(), "search results shown");
    }

    fn hide(&self) {
        info!("search results hidden");
    }
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ClientConfig::from_env()?;
    info!(base_url = %config.base_url, "Starting cart session");

    let cart = CartClient::new(config.clone(), Arc::new(TracingNotifier))?;
    let search = SearchClient::new(config.clone(), Arc::new(LoggedResults))?;

    if let Ok(response) = cart.add("1", None, 1).await {
        info!(items = ?response.cart_count(), "product added");
    }

    // Spinner clicks faster than the quiet period: one update, quantity 5.
    for quantity in 2..=5 {
        cart.update_quantity("1", quantity);
        tokio::time::sleep(Duration::from_millis(80)).await;
    }

    // Keystrokes: one search for "camisa".
    for query in ["c", "ca", "cam", "cami", "camis", "camisa"] {
        search.search(query);
        tokio::time::sleep(Duration::from_millis(60)).await;
    }

    let settle = config.quantity_debounce().max(config.search_debounce()) + Duration::from_secs(1);
    tokio::time::sleep(settle).await;

    let count = cart.count().await?;
    info!(
        count = count.count,
        sample_price = %format::format_currency(1234.5),
        "Cart session complete"
    );

    Ok(())
}
