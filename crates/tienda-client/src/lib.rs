//! # tienda-client
//!
//! Cart and search calls against the storefront backend, built on
//! [`tienda_debounce`].
//!
//! ## Architecture
//!
//! ```text
//! quantity input ──► CartClient::update_quantity ──► Debouncer (500ms)
//!                                                        │
//!                                                        ▼ settles
//!                                        POST /carrito/actualizar/{id}
//!                                                        │
//!                            Notifier::refresh ◄── ok ───┴── err ──► Notifier::notify(Toast)
//!
//! search input ───► SearchClient::search ──────────► Debouncer (300ms)
//!                                                        │
//!                                        too short? ─────┼──► SearchResults::hide
//!                                                        ▼
//!                                        GET /buscar?q= ──► SearchResults::show(html)
//! ```
//!
//! Add, remove, clear and count are plain async calls returning
//! [`Result`]. Every operation also reports its outcome through the
//! [`Notifier`].
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tienda_client::{CartClient, ClientConfig, TracingNotifier};
//!
//! let cart = CartClient::new(ClientConfig::from_env()?, Arc::new(TracingNotifier))?;
//! cart.add("prod-42", None, 1).await?;
//!
//! // Spinner clicks: one request, quantity 4.
//! for quantity in 2..=4 {
//!     cart.update_quantity("item-7", quantity);
//! }
//! ```

mod api;
mod cart;
mod config;
mod error;
pub mod format;
mod notify;
mod search;

pub use api::{ApiResponse, CartCount};
pub use cart::CartClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use notify::{Notifier, SearchResults, Toast, ToastLevel, TracingNotifier};
pub use search::SearchClient;
