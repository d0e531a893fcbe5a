use serde::{Deserialize, Serialize};

/// Immutable snapshot of the in-progress order.
///
/// Snapshots are produced by [`OrderStore`](crate::store::OrderStore) and
/// handed to observers whole; a snapshot is never partially applied. The
/// selection fields start unset and are filled in flow order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderState {
    /// Number of cupcakes, one of the catalog package sizes.
    pub quantity: Option<u32>,

    /// Resolved flavor label.
    pub flavor: Option<String>,

    /// Chosen pickup date, one of `pickup_options`.
    pub date: Option<String>,

    /// Currency-formatted subtotal. Always derived, never set directly.
    pub price: String,

    /// Offered pickup dates, generated once per order lifecycle.
    pub pickup_options: Vec<String>,
}

impl OrderState {
    pub fn has_quantity(&self) -> bool {
        self.quantity.is_some()
    }

    pub fn has_flavor(&self) -> bool {
        self.flavor.as_deref().is_some_and(|flavor| !flavor.is_empty())
    }

    pub fn has_date(&self) -> bool {
        self.date.is_some()
    }

    /// The earliest offered pickup date. Choosing it carries the same-day
    /// premium.
    pub fn earliest_pickup(&self) -> Option<&str> {
        self.pickup_options.first().map(String::as_str)
    }
}
