//! Wire types for the create-order and order-history endpoints.

use crate::shared::{serde_util, OrderId, UserId, VendorId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Create order (request) ──────────────────────────────────────────────────

/// Body of `POST /api/orders`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: UserId,
    pub vendor_id: VendorId,
    pub items: Vec<LineItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub payment_info: PaymentInfo,
}

/// A single line of an order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: u64,
    pub name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Opaque payment reference, passed through untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub payment_method_id: String,
}

// ─── Create order (response) ─────────────────────────────────────────────────

/// Body returned by `POST /api/orders`.
///
/// Only `success` is relied upon; the remaining fields are read on the
/// failure path or logged.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CreateOrderResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, alias = "orderId")]
    pub order_id: Option<OrderId>,
}

impl CreateOrderResponse {
    /// Reason the backend gave for not accepting the order, if any.
    pub fn reason(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .filter(|r| !r.trim().is_empty())
    }
}

// ─── Order history ───────────────────────────────────────────────────────────

/// One element of `GET /api/orders/user/{user_id}`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub id: OrderId,
    pub status: String,
    #[serde(with = "serde_util::lenient_decimal")]
    pub total: Decimal,
    #[serde(with = "serde_util::flexible_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, alias = "restaurant_name")]
    pub vendor_name: Option<String>,
}
