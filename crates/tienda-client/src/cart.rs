//! Cart operations against the storefront backend.

use async_trait::async_trait;
use std::sync::Arc;
use tienda_debounce::{Action, Debouncer};
use tracing::{debug, error};

use crate::api::{ApiResponse, CartCount};
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::notify::{Notifier, Toast};

/// Marks requests as coming from the page script so the backend answers
/// with JSON instead of a redirect.
const HX_REQUEST: &str = "HX-Request";

/// Shared HTTP plumbing for cart requests.
#[derive(Clone)]
struct CartApi {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl CartApi {
    async fn count(&self) -> Result<CartCount> {
        let count = self
            .http
            .get(self.config.url("/carrito/contador"))
            .send()
            .await?
            .json::<CartCount>()
            .await?;
        Ok(count)
    }

    /// POST a form and decode the `{success, error}` envelope. Non-2xx
    /// answers still carry that envelope, so the status is not checked.
    async fn post(&self, path: &str, form: &[(&str, String)]) -> Result<ApiResponse> {
        let response = self
            .http
            .post(self.config.url(path))
            .header(HX_REQUEST, "true")
            .form(form)
            .send()
            .await?
            .json::<ApiResponse>()
            .await?;
        response.into_result()
    }
}

/// Cart client.
///
/// Quantity updates are debounced: rapid changes to the quantity input
/// collapse into a single request carrying the last value. The debouncer
/// is shared by all items, so a change to one item supersedes a pending
/// change to another.
pub struct CartClient {
    api: CartApi,
    notifier: Arc<dyn Notifier>,
    quantity: Debouncer<(String, u32)>,
}

impl CartClient {
    /// Build a cart client. Must be called inside a tokio runtime.
    pub fn new(config: ClientConfig, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::with_http(http, config, notifier))
    }

    pub fn with_http(
        http: reqwest::Client,
        config: ClientConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let api = CartApi {
            http,
            config: Arc::new(config),
        };
        let quantity = Debouncer::with_action(
            api.config.quantity_debounce(),
            UpdateQuantity {
                api: api.clone(),
                notifier: notifier.clone(),
            },
        );

        Self {
            api,
            notifier,
            quantity,
        }
    }

    /// Current number of items in the cart. A successful read is also
    /// handed to [`Notifier::cart_count`].
    pub async fn count(&self) -> Result<CartCount> {
        match self.api.count().await {
            Ok(count) => {
                self.notifier.cart_count(count);
                Ok(count)
            }
            Err(e) => {
                error!(error = %e, "Error updating cart count");
                Err(e)
            }
        }
    }

    /// Add a product (optionally a specific variant) to the cart.
    pub async fn add(
        &self,
        product_id: &str,
        variant_id: Option<&str>,
        quantity: u32,
    ) -> Result<ApiResponse> {
        let mut form = vec![("product_id", product_id.to_string())];
        if let Some(variant_id) = variant_id {
            form.push(("variant_id", variant_id.to_string()));
        }
        form.push(("quantity", quantity.to_string()));

        match self.api.post("/carrito/agregar", &form).await {
            Ok(response) => {
                self.notifier
                    .notify(Toast::success("Producto agregado al carrito"));
                // The count reaches the notifier on success; a failed read
                // is logged and does not fail the add.
                if let Err(e) = self.count().await {
                    debug!(error = %e, "cart count not refreshed after add");
                }
                Ok(response)
            }
            Err(e) => Err(self.report(e, "Error al agregar al carrito")),
        }
    }

    /// Remove a line item. Confirmation is the caller's concern.
    pub async fn remove(&self, item_id: &str) -> Result<ApiResponse> {
        match self
            .api
            .post(&format!("/carrito/eliminar/{item_id}"), &[])
            .await
        {
            Ok(response) => {
                self.notifier.notify(Toast::success("Producto eliminado"));
                self.notifier.refresh();
                Ok(response)
            }
            Err(e) => Err(self.report(e, "Error al eliminar")),
        }
    }

    /// Empty the cart.
    pub async fn clear(&self) -> Result<ApiResponse> {
        match self.api.post("/carrito/limpiar", &[]).await {
            Ok(response) => {
                self.notifier.refresh();
                Ok(response)
            }
            Err(e) => Err(self.report(e, "Error al vaciar el carrito")),
        }
    }

    /// Set a line item's quantity once input settles.
    ///
    /// Fire-and-forget: the outcome is reported through the notifier.
    pub fn update_quantity(&self, item_id: impl Into<String>, quantity: u32) {
        self.quantity.invoke((item_id.into(), quantity));
    }

    /// Whether a quantity update is still waiting for input to settle.
    pub fn has_pending_update(&self) -> bool {
        self.quantity.is_pending()
    }

    fn report(&self, e: ClientError, fallback: &str) -> ClientError {
        report(self.notifier.as_ref(), &e, fallback);
        e
    }
}

fn report(notifier: &dyn Notifier, e: &ClientError, fallback: &str) {
    if !matches!(e, ClientError::Rejected { .. }) {
        error!(error = %e, "{fallback}");
    }
    notifier.notify(Toast::error(e.user_message(fallback)));
}

/// The debounced body of [`CartClient::update_quantity`].
struct UpdateQuantity {
    api: CartApi,
    notifier: Arc<dyn Notifier>,
}

#[async_trait]
impl Action<(String, u32)> for UpdateQuantity {
    async fn run(&self, (item_id, quantity): (String, u32)) {
        let path = format!("/carrito/actualizar/{item_id}");
        match self
            .api
            .post(&path, &[("quantity", quantity.to_string())])
            .await
        {
            Ok(_) => {
                debug!(%item_id, quantity, "quantity updated");
                self.notifier.refresh();
            }
            Err(e) => report(self.notifier.as_ref(), &e, "Error al actualizar"),
        }
    }
}
