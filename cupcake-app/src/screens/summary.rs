//! Final screen: review the composed order before sending it.

use cupcake_core::OrderState;

use crate::strings;

pub struct OrderSummaryScreen;

impl OrderSummaryScreen {
    /// Renders the order recap. Missing fields render empty; the flow's
    /// guards keep them filled by the time this screen is reachable.
    pub fn render(order: &OrderState) -> String {
        let mut out = Self::details(order);
        out.push('\n');
        out
    }

    /// The order-details text, also used as the shared summary on send.
    pub fn details(order: &OrderState) -> String {
        strings::order_details(
            order.quantity.unwrap_or(0),
            order.flavor.as_deref().unwrap_or(""),
            order.date.as_deref().unwrap_or(""),
            &order.price,
        )
    }
}

#[cfg(test)]
mod tests {
    use cupcake_core::OrderState;

    use super::*;

    #[test]
    fn render_shows_flavor_date_and_price() {
        let order = OrderState {
            quantity: Some(6),
            flavor: Some("Vanilla".to_string()),
            date: Some("Mon Nov 13".to_string()),
            price: "$100.00".to_string(),
            pickup_options: Vec::new(),
        };

        let rendered = OrderSummaryScreen::render(&order);

        assert!(rendered.contains("Vanilla"));
        assert!(rendered.contains("Mon Nov 13"));
        assert!(rendered.contains("$100.00"));
    }
}
