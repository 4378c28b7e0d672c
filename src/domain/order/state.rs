//! Order history state — replaced wholesale on every successful fetch.

use super::Order;
use chrono::{DateTime, Utc};

/// Ticket handed out when a history fetch starts.
///
/// Tickets are strictly increasing; a response is only applied if its ticket
/// is newer than the last one applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Local copy of the user's orders.
///
/// Never merged or patched: each successful fetch replaces the whole list, so
/// the local view is never more current than the last applied response.
#[derive(Debug, Clone, Default)]
pub struct OrderHistory {
    orders: Vec<Order>,
    next_ticket: u64,
    applied: Option<FetchTicket>,
    synced_at: Option<DateTime<Utc>>,
}

impl OrderHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a ticket for a fetch that is about to be issued.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.next_ticket += 1;
        FetchTicket(self.next_ticket)
    }

    /// Replace the list with a fetch result.
    ///
    /// Returns `false` (and leaves the list untouched) when a fetch started
    /// later has already been applied.
    pub fn apply(&mut self, ticket: FetchTicket, orders: Vec<Order>) -> bool {
        if self.applied.is_some_and(|applied| applied >= ticket) {
            return false;
        }
        self.orders = orders;
        self.applied = Some(ticket);
        self.synced_at = Some(Utc::now());
        true
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// When the list was last replaced, `None` before the first successful fetch.
    pub fn synced_at(&self) -> Option<DateTime<Utc>> {
        self.synced_at
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;
    use crate::shared::OrderId;
    use rust_decimal::Decimal;

    fn make_order(id: &str, status: &str) -> Order {
        Order {
            id: OrderId::from(id),
            status: OrderStatus::from(status),
            total: Decimal::new(1599, 2),
            created_at: Utc::now(),
            vendor_name: None,
        }
    }

    #[test]
    fn test_apply_replaces_everything() {
        let mut history = OrderHistory::new();
        let t1 = history.begin_fetch();
        assert!(history.apply(t1, vec![make_order("1", "preparing"), make_order("2", "delivered")]));
        assert_eq!(history.len(), 2);

        let t2 = history.begin_fetch();
        assert!(history.apply(t2, vec![make_order("3", "preparing")]));
        let ids: Vec<_> = history.orders().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["3"]);
        assert!(history.synced_at().is_some());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut history = OrderHistory::new();
        let older = history.begin_fetch();
        let newer = history.begin_fetch();
        assert!(history.apply(newer, vec![make_order("new", "preparing")]));
        assert!(!history.apply(older, vec![make_order("old", "delivered")]));
        assert_eq!(history.orders()[0].id.as_str(), "new");
    }

    #[test]
    fn test_empty_until_first_fetch() {
        let mut history = OrderHistory::new();
        assert!(history.is_empty());
        assert!(history.synced_at().is_none());
        let t = history.begin_fetch();
        assert!(history.apply(t, Vec::new()));
        assert!(history.is_empty());
        assert!(history.synced_at().is_some());
    }
}
