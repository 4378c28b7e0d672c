//! Submissions sub-client — the single-flight order submission controller.

use super::{Notice, Submission, SubmissionOutcome, SubmitError};
use crate::client::FoodflashClient;
use crate::domain::submission::ControllerState;
use crate::error::SdkError;
use crate::shared::VendorId;

pub struct Submissions<'a> {
    pub(crate) client: &'a FoodflashClient,
}

impl<'a> Submissions<'a> {
    /// Submit an order for `vendor_id`.
    ///
    /// At most one submission runs at a time: a call made while another is
    /// outstanding returns [`SubmissionOutcome::Busy`] without touching the
    /// backend or the banner. Otherwise exactly one create-order call is made,
    /// followed on success by one history refresh; the controller returns to
    /// idle only after both finish. Failures are recorded as the banner and
    /// never retried.
    pub async fn submit(&self, vendor_id: VendorId, vendor_name: &str) -> SubmissionOutcome {
        let controller = &self.client.controller;
        let Some(guard) = controller.try_begin() else {
            tracing::warn!(%vendor_id, "Submission already in flight, ignoring");
            return SubmissionOutcome::Busy;
        };
        controller.reset_messages().await;

        let submission = Submission::build(self.client.user_id, vendor_id, vendor_name);
        tracing::debug!(
            %vendor_id,
            total = %submission.request.total,
            "Placing order"
        );

        let outcome = match self.client.backend.create_order(&submission.request).await {
            Ok(response) if response.success => {
                tracing::info!(
                    %vendor_id,
                    order_id = ?response.order_id,
                    "Order placed at {}",
                    submission.vendor_name
                );
                // A failed refresh is logged by the synchronizer; the order still stands.
                let _ = self.client.orders().refresh(self.client.user_id).await;
                controller
                    .record_notice(Notice::OrderPlaced {
                        vendor_name: submission.vendor_name.clone(),
                    })
                    .await;
                SubmissionOutcome::Placed {
                    vendor_name: submission.vendor_name,
                    order_id: response.order_id,
                }
            }
            Ok(response) => self.fail(vendor_id, SubmitError::from_response(&response)).await,
            Err(e) => self.fail(vendor_id, SubmitError::from_http(&e)).await,
        };

        drop(guard);
        outcome
    }

    /// Submit an order for a catalog vendor, looking up its display name.
    pub async fn submit_vendor(&self, vendor_id: VendorId) -> Result<SubmissionOutcome, SdkError> {
        let vendor_name = self
            .client
            .catalog
            .get(vendor_id)
            .map(|v| v.name.clone())
            .ok_or_else(|| SdkError::Validation(format!("unknown vendor id {}", vendor_id)))?;
        Ok(self.submit(vendor_id, &vendor_name).await)
    }

    pub async fn state(&self) -> ControllerState {
        self.client.controller.snapshot().await
    }

    pub fn is_submitting(&self) -> bool {
        self.client.controller.is_submitting()
    }

    /// Clear the failure banner.
    pub async fn dismiss_error(&self) {
        self.client.controller.dismiss_error().await;
    }

    /// Consume the pending success notification, if any.
    pub async fn take_notice(&self) -> Option<Notice> {
        self.client.controller.take_notice().await
    }

    async fn fail(&self, vendor_id: VendorId, error: SubmitError) -> SubmissionOutcome {
        tracing::error!(%vendor_id, error = ?error, "Order error");
        self.client.controller.record_error(error.banner()).await;
        SubmissionOutcome::Failed(error)
    }
}
