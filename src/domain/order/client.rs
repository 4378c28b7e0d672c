//! Orders sub-client — the history synchronizer.

use crate::client::FoodflashClient;
use crate::domain::order::Order;
use crate::error::SdkError;
use crate::shared::UserId;

pub struct Orders<'a> {
    pub(crate) client: &'a FoodflashClient,
}

impl<'a> Orders<'a> {
    /// Fetch every order of `user_id` and replace the local list with it.
    ///
    /// Returns the local list after the fetch. When a later fetch has already
    /// been applied, this response is discarded and that list is returned.
    ///
    /// On failure the local list is left as it was and the error is logged;
    /// it is returned for callers that care, but never raises the banner.
    pub async fn refresh(&self, user_id: UserId) -> Result<Vec<Order>, SdkError> {
        let ticket = self.client.history.write().await.begin_fetch();

        let records = match self.client.backend.fetch_orders(user_id).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(%user_id, error = %e, "Error loading orders");
                return Err(e.into());
            }
        };

        let orders: Vec<Order> = records.into_iter().map(Order::from).collect();
        let count = orders.len();
        let mut history = self.client.history.write().await;
        if history.apply(ticket, orders) {
            tracing::info!(%user_id, count, "Order history replaced");
        } else {
            tracing::debug!(%user_id, "Discarding stale order history response");
        }
        Ok(history.orders().to_vec())
    }

    /// Refresh the configured user's history.
    pub async fn refresh_current(&self) -> Result<Vec<Order>, SdkError> {
        self.refresh(self.client.user_id).await
    }

    /// The current local list.
    pub async fn list(&self) -> Vec<Order> {
        self.client.history.read().await.orders().to_vec()
    }
}
