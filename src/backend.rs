//! The two backend operations the client consumes.
//!
//! `FoodflashHttp` is the production implementation; anything else that can
//! create orders and list them (an in-process fake, a proxy) can be plugged
//! into `FoodflashClientBuilder::backend`.

use crate::domain::order::wire::{CreateOrderRequest, CreateOrderResponse, OrderRecord};
use crate::error::HttpError;
use crate::shared::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait OrderBackend: Send + Sync {
    /// Submit a new order. No retries: a failure is terminal for the attempt.
    async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, HttpError>;

    /// Fetch every order of `user_id`, in backend order, in one response.
    async fn fetch_orders(&self, user_id: UserId) -> Result<Vec<OrderRecord>, HttpError>;
}
