//! Render model for a presentation layer.
//!
//! Pure functions over a [`ClientSnapshot`]: the view reads state, it never
//! writes it. Actions (ordering, dismissing the banner) go back through the
//! client's sub-clients.

use crate::client::ClientSnapshot;
use crate::domain::order::{Order, StatusTone};
use crate::domain::submission::unit_price;
use crate::domain::vendor::{Catalog, Vendor};
use crate::shared::VendorId;

pub const PROCESSING_TEXT: &str = "Processing order...";
pub const EMPTY_HISTORY_TEXT: &str = "No orders yet. Place your first order above!";

/// One catalog entry as displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorCard {
    pub vendor_id: VendorId,
    pub name: String,
    pub description: String,
    pub rating: String,
    pub delivery: String,
    pub button_label: String,
    /// Advisory: the controller rejects overlapping submissions regardless.
    pub button_enabled: bool,
}

/// One history entry as displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCard {
    pub title: String,
    pub status: String,
    pub tone: StatusTone,
    pub total: String,
    pub date: String,
    pub vendor: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetView {
    pub banner: Option<String>,
    pub notice: Option<String>,
    pub processing: Option<&'static str>,
    pub vendors: Vec<VendorCard>,
    pub orders: Vec<OrderCard>,
    /// Shown instead of `orders` when the history is empty.
    pub empty_history: Option<&'static str>,
}

impl WidgetView {
    pub fn render(catalog: &Catalog, snapshot: &ClientSnapshot) -> Self {
        let submitting = snapshot.submitting;
        Self {
            banner: snapshot.last_error.clone(),
            notice: snapshot.notice.as_ref().map(|n| n.to_string()),
            processing: submitting.then_some(PROCESSING_TEXT),
            vendors: catalog
                .vendors()
                .iter()
                .map(|v| vendor_card(v, submitting))
                .collect(),
            orders: snapshot.orders.iter().map(order_card).collect(),
            empty_history: snapshot.orders.is_empty().then_some(EMPTY_HISTORY_TEXT),
        }
    }
}

fn vendor_card(vendor: &Vendor, submitting: bool) -> VendorCard {
    VendorCard {
        vendor_id: vendor.id,
        name: vendor.name.clone(),
        description: vendor.description.clone(),
        rating: format!("{}/5", vendor.rating),
        delivery: format!("{} min delivery", vendor.delivery_time),
        button_label: if submitting {
            "Processing...".to_string()
        } else {
            format!("Order Now - ${}", unit_price())
        },
        button_enabled: !submitting,
    }
}

fn order_card(order: &Order) -> OrderCard {
    OrderCard {
        title: format!("Order #{}", order.id),
        status: order.status.to_string(),
        tone: order.status.tone(),
        total: format!("${}", order.total),
        date: order.created_at.format("%-m/%-d/%Y").to_string(),
        vendor: order.vendor_name.as_ref().map(|name| format!("Restaurant: {}", name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;
    use crate::domain::submission::Notice;
    use crate::shared::OrderId;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn snapshot(submitting: bool, orders: Vec<Order>) -> ClientSnapshot {
        ClientSnapshot {
            submitting,
            last_error: None,
            notice: None,
            orders,
            synced_at: None,
        }
    }

    #[test]
    fn test_idle_view_enables_buttons() {
        let view = WidgetView::render(&Catalog::default_catalog(), &snapshot(false, vec![]));
        assert_eq!(view.vendors.len(), 3);
        assert!(view.vendors.iter().all(|c| c.button_enabled));
        assert_eq!(view.vendors[0].button_label, "Order Now - $15.99");
        assert_eq!(view.vendors[0].rating, "4.5/5");
        assert_eq!(view.vendors[1].delivery, "25 min delivery");
        assert_eq!(view.empty_history, Some(EMPTY_HISTORY_TEXT));
        assert!(view.processing.is_none());
    }

    #[test]
    fn test_submitting_view_disables_buttons() {
        let view = WidgetView::render(&Catalog::default_catalog(), &snapshot(true, vec![]));
        assert_eq!(view.processing, Some(PROCESSING_TEXT));
        assert!(view.vendors.iter().all(|c| !c.button_enabled));
        assert!(view.vendors.iter().all(|c| c.button_label == "Processing..."));
    }

    #[test]
    fn test_order_cards_and_messages() {
        let order = Order {
            id: OrderId::from("12"),
            status: OrderStatus::from("preparing"),
            total: Decimal::new(1599, 2),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap(),
            vendor_name: Some("Burger Barn".into()),
        };
        let mut snap = snapshot(false, vec![order]);
        snap.last_error = Some("Failed to place order: card declined".into());
        snap.notice = Some(Notice::OrderPlaced {
            vendor_name: "Burger Barn".into(),
        });

        let view = WidgetView::render(&Catalog::default_catalog(), &snap);
        assert_eq!(view.banner.as_deref(), Some("Failed to place order: card declined"));
        assert_eq!(
            view.notice.as_deref(),
            Some("Order placed successfully at Burger Barn!")
        );
        assert!(view.empty_history.is_none());
        let card = &view.orders[0];
        assert_eq!(card.title, "Order #12");
        assert_eq!(card.tone, StatusTone::Preparing);
        assert_eq!(card.total, "$15.99");
        assert_eq!(card.date, "6/1/2025");
        assert_eq!(card.vendor.as_deref(), Some("Restaurant: Burger Barn"));
    }
}
