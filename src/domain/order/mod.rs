//! Order domain — server-owned orders and the locally cached history.

pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::OrderId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use state::OrderHistory;
pub use wire::{CreateOrderRequest, CreateOrderResponse, LineItem, PaymentInfo};

// ─── OrderStatus ─────────────────────────────────────────────────────────────

/// Backend status label. Opaque: never validated, only classified for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderStatus(String);

impl OrderStatus {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn tone(&self) -> StatusTone {
        match self.0.as_str() {
            "preparing" => StatusTone::Preparing,
            "delivered" => StatusTone::Delivered,
            _ => StatusTone::Other,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderStatus {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Display classification of an [`OrderStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTone {
    Preparing,
    Delivered,
    Other,
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// A locally cached copy of a backend order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    pub vendor_name: Option<String>,
}
