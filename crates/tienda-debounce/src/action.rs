//! The side effect a [`Debouncer`](crate::Debouncer) eventually runs.

use async_trait::async_trait;
use std::future::Future;

/// A side effect run once per quiet period with the latest arguments.
///
/// Actions are fire-and-forget: nothing they produce flows back to the
/// caller of [`Debouncer::invoke`](crate::Debouncer::invoke). An action that
/// can fail must catch and report its own errors.
///
/// Multi-argument actions take a tuple.
///
/// # Example
///
/// ```ignore
/// struct UpdateQuantity {
///     http: reqwest::Client,
/// }
///
/// #[async_trait]
/// impl Action<(String, u32)> for UpdateQuantity {
///     async fn run(&self, (item_id, quantity): (String, u32)) {
///         if let Err(e) = self.post(&item_id, quantity).await {
///             tracing::error!(error = %e, "quantity update failed");
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Action<A: Send + 'static>: Send + Sync + 'static {
    async fn run(&self, args: A);
}

/// Adapts an async closure into an [`Action`].
pub struct FnAction<F>(F);

impl<F> FnAction<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<A, F, Fut> Action<A> for FnAction<F>
where
    A: Send + 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn run(&self, args: A) {
        (self.0)(args).await
    }
}
