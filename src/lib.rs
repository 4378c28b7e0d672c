//! # FoodFlash SDK
//!
//! Client-side ordering core for the FoodFlash backend: a fixed vendor
//! catalog, single-flight order submission, and full-replace order history
//! synchronization.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Newtypes, vendor catalog, order and submission domains
//! 2. **Backend** — `OrderBackend`, the two backend operations the core consumes
//! 3. **HTTP API** — `FoodflashHttp` with per-endpoint retry policies
//! 4. **High-Level Client** — `FoodflashClient` owning the widget state
//! 5. **View** — Read-only render model for a presentation layer
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use foodflash_sdk::prelude::*;
//!
//! let client = FoodflashClient::builder()
//!     .base_url("http://localhost:5000")
//!     .build()?;
//!
//! client.mount().await;
//! let outcome = client.submissions().submit(VendorId::new(2), "Burger Barn").await;
//! let snapshot = client.snapshot().await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL and identity constants.
pub mod network;

// ── Layer 2: Backend ─────────────────────────────────────────────────────────

/// The backend operations consumed by the client.
pub mod backend;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `FoodflashClient` — the primary entry point.
pub mod client;

// ── Layer 5: View ────────────────────────────────────────────────────────────

/// Render model derived from a client snapshot.
pub mod view;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{OrderId, UserId, VendorId};

    // Domain types — vendor
    pub use crate::domain::vendor::{Catalog, Vendor};

    // Domain types — order
    pub use crate::domain::order::{Order, OrderHistory, OrderStatus, StatusTone};

    // Domain types — submission
    pub use crate::domain::submission::{
        ControllerState, Notice, Submission, SubmissionOutcome, SubmitError,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_USER_ID};

    // Backend seam
    pub use crate::backend::OrderBackend;

    // Client + sub-clients
    pub use crate::client::{
        ClientSnapshot, FoodflashClient, FoodflashClientBuilder, OrdersClient, SubmissionsClient,
    };

    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
    #[cfg(feature = "http")]
    pub use crate::http::FoodflashHttp;

    // View
    pub use crate::view::{OrderCard, VendorCard, WidgetView};
}
