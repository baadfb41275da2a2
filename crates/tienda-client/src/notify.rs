//! The UI surface the client reports to.
//!
//! The client never renders anything itself. Outcomes of cart and search
//! operations are handed to a [`Notifier`] (toasts, view refreshes) and a
//! [`SearchResults`] panel owned by whoever embeds the client.

use serde::Serialize;
use std::fmt;
use tracing::{error, info, warn};

use crate::api::CartCount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    Info,
}

impl fmt::Display for ToastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ToastLevel::Success => "success",
            ToastLevel::Error => "error",
            ToastLevel::Warning => "warning",
            ToastLevel::Info => "info",
        })
    }
}

/// A short user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Error)
    }
}

pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, toast: Toast);

    /// The cart changed server-side; views showing it are stale.
    fn refresh(&self) {}

    /// A fresh item count from the backend, for cart badges. A zero count
    /// means the badge should be hidden.
    fn cart_count(&self, _count: CartCount) {}
}

/// Reports toasts through `tracing`. Useful headless and in demos.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.level {
            ToastLevel::Error => error!(level = %toast.level, "{}", toast.message),
            ToastLevel::Warning => warn!(level = %toast.level, "{}", toast.message),
            ToastLevel::Success | ToastLevel::Info => {
                info!(level = %toast.level, "{}", toast.message)
            }
        }
    }

    fn refresh(&self) {
        info!("cart changed, refresh requested");
    }

    fn cart_count(&self, count: CartCount) {
        info!(count = count.count, "cart count updated");
    }
}

/// The search results panel.
pub trait SearchResults: Send + Sync + 'static {
    /// Replace the panel content with a rendered results fragment and show it.
    fn show(&self, html: String);

    fn hide(&self);
}
