//! Submission domain — one user-initiated attempt to create an order.
//!
//! - [`Submission`] is the payload builder: pure, no I/O.
//! - [`SubmitError`] classifies failures into network vs. server rejection.
//! - [`state`] holds the single-flight controller state.
//! - [`client`] is the controller driving the backend.

pub mod client;
pub mod state;

use crate::domain::order::wire::{CreateOrderRequest, CreateOrderResponse, LineItem, PaymentInfo};
use crate::error::HttpError;
use crate::shared::{OrderId, UserId, VendorId};
use rust_decimal::Decimal;
use thiserror::Error;

pub use state::ControllerState;

/// Line item every order is placed with.
pub const SAMPLE_ITEM_ID: u64 = 1;
pub const SAMPLE_ITEM_NAME: &str = "Sample Item";
/// Payment method reference passed through to the backend.
pub const TEST_PAYMENT_METHOD_ID: &str = "pm_test_card";

/// Fixed unit price of the sample item (15.99).
pub fn unit_price() -> Decimal {
    Decimal::new(1599, 2)
}

/// Prefix of every submission failure banner.
pub const FAILURE_PREFIX: &str = "Failed to place order: ";

/// Reason used when the backend answers `success: false` without saying why.
pub const NOT_ACCEPTED_REASON: &str = "order was not accepted";

// ─── Submission ──────────────────────────────────────────────────────────────

/// An order attempt: the target vendor plus the normalized request payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub vendor_id: VendorId,
    pub vendor_name: String,
    pub request: CreateOrderRequest,
}

impl Submission {
    /// Build the payload for `vendor_id`.
    ///
    /// The vendor id is trusted: the catalog is the only source of selectable
    /// ids. Item, price and payment reference are fixed.
    pub fn build(user_id: UserId, vendor_id: VendorId, vendor_name: impl Into<String>) -> Self {
        let price = unit_price();
        let items = vec![LineItem {
            id: SAMPLE_ITEM_ID,
            name: SAMPLE_ITEM_NAME.to_string(),
            quantity: 1,
            price,
        }];
        let total = items
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum();

        Self {
            vendor_id,
            vendor_name: vendor_name.into(),
            request: CreateOrderRequest {
                user_id,
                vendor_id,
                items,
                total,
                payment_info: PaymentInfo {
                    payment_method_id: TEST_PAYMENT_METHOD_ID.to_string(),
                },
            },
        }
    }
}

// ─── Failures ────────────────────────────────────────────────────────────────

/// Why a submission attempt failed. Both variants surface identically as a
/// dismissible banner.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// The request never reached the backend or never came back.
    #[error("{0}")]
    NetworkFailure(String),

    /// The backend answered but refused the order. `status` is `None` when the
    /// refusal came as a 2xx body with `success: false`.
    #[error("{reason}")]
    RejectedByServer { status: Option<u16>, reason: String },
}

impl SubmitError {
    /// Classify a transport-level failure of the create-order call.
    pub fn from_http(error: &HttpError) -> Self {
        match error.status() {
            Some(status) => SubmitError::RejectedByServer {
                status: Some(status),
                reason: error
                    .server_reason()
                    .unwrap_or_else(|| format!("Request failed with status code {}", status)),
            },
            None => SubmitError::NetworkFailure(error.to_string()),
        }
    }

    /// Classify a success-shaped response whose `success` flag is false.
    pub fn from_response(response: &CreateOrderResponse) -> Self {
        SubmitError::RejectedByServer {
            status: None,
            reason: response.reason().unwrap_or(NOT_ACCEPTED_REASON).to_string(),
        }
    }

    /// User-facing banner text.
    pub fn banner(&self) -> String {
        format!("{}{}", FAILURE_PREFIX, self)
    }
}

// ─── Outcome + notice ────────────────────────────────────────────────────────

/// Transient success notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    OrderPlaced { vendor_name: String },
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::OrderPlaced { vendor_name } => {
                write!(f, "Order placed successfully at {}!", vendor_name)
            }
        }
    }
}

/// Result of one call to `submit`.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The backend accepted the order and history was refreshed.
    Placed {
        vendor_name: String,
        order_id: Option<OrderId>,
    },
    /// The attempt failed; the banner text is in `ControllerState::last_error`.
    Failed(SubmitError),
    /// Another submission was still in flight; nothing was sent.
    Busy,
}

impl SubmissionOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, SubmissionOutcome::Placed { .. })
    }
}
