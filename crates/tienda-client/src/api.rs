//! JSON shapes returned by the storefront backend.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ClientError, Result};

/// `{ "success": bool, "error"?: string, ... }`
///
/// Endpoint-specific extras (`cart_count`, `cart_total`) stay untyped.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApiResponse {
    /// Turn `success: false` into [`ClientError::Rejected`].
    pub fn into_result(self) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(ClientError::Rejected {
                message: self.error,
            })
        }
    }

    pub fn cart_count(&self) -> Option<u64> {
        self.extra.get("cart_count").and_then(Value::as_u64)
    }

    pub fn cart_total(&self) -> Option<f64> {
        self.extra.get("cart_total").and_then(Value::as_f64)
    }
}

/// Response of the cart counter endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CartCount {
    pub count: u64,
}
