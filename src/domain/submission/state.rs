//! Controller state — the single-flight flag plus banner and notice slots.

use super::Notice;
use async_lock::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Read-only view of the controller, handed to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerState {
    pub submitting: bool,
    pub last_error: Option<String>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Default)]
struct Messages {
    last_error: Option<String>,
    notice: Option<Notice>,
}

/// Shared controller cell. Only the submission controller writes to it.
#[derive(Debug, Default)]
pub(crate) struct SharedController {
    in_flight: AtomicBool,
    messages: RwLock<Messages>,
}

impl SharedController {
    /// Claim the single in-flight slot, or `None` if a submission is outstanding.
    pub(crate) fn try_begin(self: &Arc<Self>) -> Option<InFlightGuard> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard {
                controller: Arc::clone(self),
            })
    }

    pub(crate) fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub(crate) async fn reset_messages(&self) {
        let mut messages = self.messages.write().await;
        messages.last_error = None;
        messages.notice = None;
    }

    pub(crate) async fn record_error(&self, banner: String) {
        self.messages.write().await.last_error = Some(banner);
    }

    pub(crate) async fn record_notice(&self, notice: Notice) {
        self.messages.write().await.notice = Some(notice);
    }

    pub(crate) async fn dismiss_error(&self) {
        self.messages.write().await.last_error = None;
    }

    pub(crate) async fn take_notice(&self) -> Option<Notice> {
        self.messages.write().await.notice.take()
    }

    pub(crate) async fn snapshot(&self) -> ControllerState {
        let messages = self.messages.read().await;
        ControllerState {
            submitting: self.is_submitting(),
            last_error: messages.last_error.clone(),
            notice: messages.notice.clone(),
        }
    }
}

/// Holds the in-flight slot; releasing it on drop means a cancelled submit
/// future never leaves the controller stuck in "submitting".
pub(crate) struct InFlightGuard {
    controller: Arc<SharedController>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.controller.in_flight.store(false, Ordering::Release);
    }
}
