//! Text renderers
//!
//! Pure functions from session data to text. They never touch the session
//! itself; the terminal shell prints whatever they return.

use crate::cart::helpers::{format_item_summary, format_price, total_units};
use crate::catalog::Catalog;
use crate::commerce::AdminStats;
use crate::notification::{Notification, NotificationKind};
use crate::session::SessionView;

pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::from("== Products ==\n");
    for product in catalog.products() {
        out.push_str(&format!(
            "[{}] {:<12} {:>10}  {}\n",
            product.id,
            product.name,
            format_price(product.price),
            product.description
        ));
    }
    out
}

pub fn render_cart(view: &SessionView) -> String {
    let mut out = String::from("== Shopping Cart ==\n");
    if view.is_cart_empty() {
        out.push_str("Your cart is empty\n");
        return out;
    }

    for line in &view.lines {
        out.push_str(&format!(
            "[{}] {:<12} {} each  x{}\n",
            line.product_id,
            line.name,
            format_price(line.price),
            line.quantity
        ));
    }
    out.push_str(&format!(
        "{} item(s): {}\n",
        total_units(&view.lines),
        format_item_summary(&view.lines)
    ));
    out.push_str(&format!("Total: {}\n", format_price(view.total_price)));
    if view.checkout_in_progress {
        out.push_str("Processing...\n");
    }
    out
}

/// Admin panel: the four headline totals and the list of issued codes
pub fn render_admin_panel(stats: Option<&AdminStats>) -> String {
    let mut out = String::from("== Admin Panel ==\n");
    let Some(stats) = stats else {
        out.push_str("Loading admin statistics...\n");
        return out;
    };

    out.push_str(&format!(
        "Total Items Purchased: {}\n",
        stats.total_items_purchased
    ));
    out.push_str(&format!(
        "Total Purchase Amount: {}\n",
        format_price(stats.total_purchase_amount)
    ));
    out.push_str(&format!(
        "Active Discount Codes: {}\n",
        stats.discount_codes.len()
    ));
    out.push_str(&format!(
        "Total Discount Amount: {}\n",
        format_price(stats.total_discount_amount)
    ));

    if !stats.discount_codes.is_empty() {
        out.push_str("Available Discount Codes:\n");
        for code in &stats.discount_codes {
            out.push_str(&format!(
                "  {} - {}% off ({})\n",
                code.code,
                code.discount_percent,
                if code.used { "Used" } else { "Available" }
            ));
        }
    }
    out
}

/// One-line notification banner, empty when nothing is showing
pub fn render_notification(notification: Option<&Notification>) -> String {
    match notification {
        Some(n) => {
            let tag = match n.kind {
                NotificationKind::Success => "ok",
                NotificationKind::Error => "error",
            };
            format!("[{tag}] {}\n", n.text)
        }
        None => String::new(),
    }
}

/// Full screen: notification banner, cart and admin panel
pub fn render_session(view: &SessionView) -> String {
    let mut out = render_notification(view.notification.as_ref());
    out.push_str(&render_cart(view));
    out.push_str(&render_admin_panel(view.stats.as_ref()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartLine;
    use crate::commerce::DiscountCode;

    #[test]
    fn empty_cart_renders_placeholder() {
        let rendered = render_cart(&SessionView::default());
        assert!(rendered.contains("Your cart is empty"));
        assert!(!rendered.contains("Total"));
    }

    #[test]
    fn cart_renders_lines_and_total() {
        let view = SessionView {
            lines: vec![
                CartLine {
                    product_id: 1,
                    name: "Laptop".into(),
                    price: 999.99,
                    quantity: 1,
                },
                CartLine {
                    product_id: 3,
                    name: "Headphones".into(),
                    price: 199.99,
                    quantity: 2,
                },
            ],
            total_price: 999.99 + 2.0 * 199.99,
            ..Default::default()
        };

        let rendered = render_cart(&view);
        assert!(rendered.contains("$999.99 each  x1"));
        assert!(rendered.contains("3 item(s): 1x Laptop, 2x Headphones"));
        assert!(rendered.contains("Total: $1399.97"));
    }

    #[test]
    fn admin_panel_lists_codes() {
        let stats = AdminStats {
            total_items_purchased: 3,
            total_purchase_amount: 1259.98,
            total_discount_amount: 140.0,
            discount_codes: vec![
                DiscountCode {
                    code: "SAVE1".into(),
                    discount_percent: 10.0,
                    used: true,
                },
                DiscountCode {
                    code: "SAVE2".into(),
                    discount_percent: 10.0,
                    used: false,
                },
            ],
        };

        let rendered = render_admin_panel(Some(&stats));
        assert!(rendered.contains("Total Items Purchased: 3"));
        assert!(rendered.contains("Total Purchase Amount: $1259.98"));
        assert!(rendered.contains("Active Discount Codes: 2"));
        assert!(rendered.contains("SAVE1 - 10% off (Used)"));
        assert!(rendered.contains("SAVE2 - 10% off (Available)"));

        assert!(render_admin_panel(None).contains("Loading admin statistics..."));
    }

    #[test]
    fn notification_banner_tags_kind() {
        assert_eq!(
            render_notification(Some(&Notification::error("Checkout failed"))),
            "[error] Checkout failed\n"
        );
        assert_eq!(render_notification(None), "");
    }
}
