//! Conversions: wire order records → Order domain types.

use super::wire;
use super::{Order, OrderStatus};

impl From<wire::OrderRecord> for Order {
    fn from(record: wire::OrderRecord) -> Self {
        Order {
            id: record.id,
            status: OrderStatus::new(record.status),
            total: record.total,
            created_at: record.created_at,
            vendor_name: record.vendor_name,
        }
    }
}
