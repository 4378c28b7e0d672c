//! High-level client — `FoodflashClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared widget state, and accessor methods.

use crate::backend::OrderBackend;
use crate::domain::order::client::Orders;
use crate::domain::order::{Order, OrderHistory};
use crate::domain::submission::client::Submissions;
use crate::domain::submission::state::SharedController;
use crate::domain::submission::Notice;
use crate::domain::vendor::Catalog;
use crate::error::SdkError;
use crate::shared::UserId;

use async_lock::RwLock;
use chrono::{DateTime, Utc};
use std::sync::Arc;
#[cfg(feature = "http")]
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::submission::client::Submissions as SubmissionsClient;

/// The primary entry point for the FoodFlash SDK.
///
/// Owns the widget state. The controller state is written only through
/// `client.submissions()`, the order list only through `client.orders()`.
/// Clones share the same state.
#[derive(Clone)]
pub struct FoodflashClient {
    pub(crate) backend: Arc<dyn OrderBackend>,
    pub(crate) user_id: UserId,
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) controller: Arc<SharedController>,
    pub(crate) history: Arc<RwLock<OrderHistory>>,
}

/// Everything a presentation layer renders, captured at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSnapshot {
    pub submitting: bool,
    pub last_error: Option<String>,
    pub notice: Option<Notice>,
    pub orders: Vec<Order>,
    pub synced_at: Option<DateTime<Utc>>,
}

impl FoodflashClient {
    pub fn builder() -> FoodflashClientBuilder {
        FoodflashClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn submissions(&self) -> Submissions<'_> {
        Submissions { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    /// Initial history load. A failure leaves the list empty and raises no banner.
    pub async fn mount(&self) {
        let _ = self.orders().refresh(self.user_id).await;
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub async fn snapshot(&self) -> ClientSnapshot {
        let controller = self.controller.snapshot().await;
        let history = self.history.read().await;
        ClientSnapshot {
            submitting: controller.submitting,
            last_error: controller.last_error,
            notice: controller.notice,
            orders: history.orders().to_vec(),
            synced_at: history.synced_at(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct FoodflashClientBuilder {
    base_url: String,
    user_id: UserId,
    catalog: Catalog,
    backend: Option<Arc<dyn OrderBackend>>,
    #[cfg(feature = "http")]
    timeout: Option<Duration>,
    #[cfg(feature = "http")]
    history_retry: crate::http::RetryPolicy,
}

impl Default for FoodflashClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            user_id: crate::network::DEFAULT_USER_ID,
            catalog: Catalog::default_catalog(),
            backend: None,
            #[cfg(feature = "http")]
            timeout: None,
            #[cfg(feature = "http")]
            history_retry: crate::http::RetryPolicy::None,
        }
    }
}

impl FoodflashClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Use a custom backend instead of the HTTP client. `base_url`, `timeout`
    /// and `history_retry` are ignored when set.
    pub fn backend(mut self, backend: Arc<dyn OrderBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Per-request timeout. Unset by default (the transport's own default applies).
    #[cfg(feature = "http")]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[cfg(feature = "http")]
    pub fn history_retry(mut self, policy: crate::http::RetryPolicy) -> Self {
        self.history_retry = policy;
        self
    }

    pub fn build(mut self) -> Result<FoodflashClient, SdkError> {
        let backend = match self.backend.take() {
            Some(backend) => backend,
            None => self.http_backend()?,
        };

        Ok(FoodflashClient {
            backend,
            user_id: self.user_id,
            catalog: Arc::new(self.catalog),
            controller: Arc::new(SharedController::default()),
            history: Arc::new(RwLock::new(OrderHistory::new())),
        })
    }

    #[cfg(feature = "http")]
    fn http_backend(&self) -> Result<Arc<dyn OrderBackend>, SdkError> {
        let http = crate::http::FoodflashHttp::new(&self.base_url, self.timeout)?
            .with_history_retry(self.history_retry.clone());
        Ok(Arc::new(http))
    }

    #[cfg(not(feature = "http"))]
    fn http_backend(&self) -> Result<Arc<dyn OrderBackend>, SdkError> {
        Err(SdkError::Other(format!(
            "no backend configured for {} (enable the `http` feature or call `backend`)",
            self.base_url
        )))
    }
}
