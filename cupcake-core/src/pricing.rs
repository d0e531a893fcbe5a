//! Price derivation for an in-progress order.
//!
//! Pricing is a per-cupcake unit price times the chosen quantity, plus a
//! flat premium when the order is picked up on the earliest offered date.
//! All arithmetic is [`Decimal`]; display strings come out of
//! [`format_usd`], so identical inputs always produce identical text.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::OrderState;

/// Pricing rules for a single order flow.
///
/// # Example
///
/// ```
/// use cupcake_core::pricing::PricePolicy;
///
/// let policy = PricePolicy::default();
/// assert_eq!(policy.subtotal(6, false).to_string(), "12.00");
/// assert_eq!(policy.subtotal(1, true).to_string(), "5.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricePolicy {
    /// Price of a single cupcake.
    pub unit_price: Decimal,

    /// Flat premium for picking up on the earliest offered date.
    pub same_day_surcharge: Decimal,
}

impl Default for PricePolicy {
    fn default() -> Self {
        Self {
            unit_price: Decimal::new(200, 2),
            same_day_surcharge: Decimal::new(300, 2),
        }
    }
}

impl PricePolicy {
    /// Numeric subtotal: unit price × quantity, plus the same-day premium
    /// when it applies.
    pub fn subtotal(
        &self,
        quantity: u32,
        same_day_pickup: bool,
    ) -> Decimal {
        let base = self.unit_price * Decimal::from(quantity);
        let surcharge = if same_day_pickup {
            self.same_day_surcharge
        } else {
            Decimal::ZERO
        };
        round_half_up(base + surcharge)
    }

    /// Derives the display price from the selection fields of `order`.
    ///
    /// An order with no quantity yet prices as zero. Flavor is part of the
    /// derivation but no flavor carries a premium today. The premium applies
    /// exactly when the chosen date is the earliest offered one.
    pub fn price_label(
        &self,
        order: &OrderState,
    ) -> String {
        let quantity = order.quantity.unwrap_or(0);
        let same_day = match (order.date.as_deref(), order.earliest_pickup()) {
            (Some(chosen), Some(earliest)) => chosen == earliest,
            _ => false,
        };
        format_usd(self.subtotal(quantity, same_day))
    }
}

/// Rounds a decimal value to exactly two decimal places using half-up
/// rounding (midpoints go away from zero).
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as US currency with thousands grouping.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use cupcake_core::pricing::format_usd;
///
/// assert_eq!(format_usd(dec!(0)), "$0.00");
/// assert_eq!(format_usd(dec!(12)), "$12.00");
/// assert_eq!(format_usd(dec!(1234.5)), "$1,234.50");
/// ```
pub fn format_usd(amount: Decimal) -> String {
    // Order subtotals never approach i64 cents; saturate rather than wrap
    // if someone feeds this something absurd.
    let cents = (round_half_up(amount).abs() * Decimal::ONE_HUNDRED)
        .to_i64()
        .unwrap_or(i64::MAX);
    let sign = if amount.is_sign_negative() && cents != 0 { "-" } else { "" };
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

fn group_thousands(units: i64) -> String {
    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::QUANTITY_OPTIONS;

    fn order_with(
        quantity: Option<u32>,
        date: Option<&str>,
    ) -> OrderState {
        OrderState {
            quantity,
            flavor: Some("Vanilla".to_string()),
            date: date.map(str::to_string),
            price: String::new(),
            pickup_options: vec![
                "Mon Nov 13".to_string(),
                "Tue Nov 14".to_string(),
                "Wed Nov 15".to_string(),
                "Thu Nov 16".to_string(),
            ],
        }
    }

    // =========================================================================
    // subtotal tests
    // =========================================================================

    #[test]
    fn subtotal_scales_with_quantity() {
        let policy = PricePolicy::default();

        assert_eq!(policy.subtotal(1, false), dec!(2.00));
        assert_eq!(policy.subtotal(6, false), dec!(12.00));
        assert_eq!(policy.subtotal(12, false), dec!(24.00));
    }

    #[test]
    fn subtotal_adds_same_day_surcharge() {
        let policy = PricePolicy::default();

        assert_eq!(policy.subtotal(6, true), dec!(15.00));
    }

    #[test]
    fn subtotal_is_monotonic_in_quantity() {
        let policy = PricePolicy::default();
        let mut counts: Vec<u32> = QUANTITY_OPTIONS.iter().map(|(_, n)| *n).collect();
        counts.sort_unstable();

        for same_day in [false, true] {
            for pair in counts.windows(2) {
                assert!(policy.subtotal(pair[0], same_day) <= policy.subtotal(pair[1], same_day));
            }
        }
    }

    #[test]
    fn subtotal_is_pure() {
        let policy = PricePolicy::default();

        assert_eq!(policy.subtotal(12, true), policy.subtotal(12, true));
    }

    // =========================================================================
    // price_label tests
    // =========================================================================

    #[test]
    fn price_label_is_zero_before_any_selection() {
        let policy = PricePolicy::default();

        let label = policy.price_label(&order_with(None, None));

        assert_eq!(label, "$0.00");
    }

    #[test]
    fn price_label_without_date_has_no_surcharge() {
        let policy = PricePolicy::default();

        let label = policy.price_label(&order_with(Some(6), None));

        assert_eq!(label, "$12.00");
    }

    #[test]
    fn price_label_adds_premium_for_earliest_date() {
        let policy = PricePolicy::default();

        let label = policy.price_label(&order_with(Some(6), Some("Mon Nov 13")));

        assert_eq!(label, "$15.00");
    }

    #[test]
    fn price_label_skips_premium_for_later_dates() {
        let policy = PricePolicy::default();

        let label = policy.price_label(&order_with(Some(6), Some("Tue Nov 14")));

        assert_eq!(label, "$12.00");
    }

    #[test]
    fn price_label_is_deterministic() {
        let policy = PricePolicy::default();
        let order = order_with(Some(12), Some("Wed Nov 15"));

        assert_eq!(policy.price_label(&order), policy.price_label(&order));
    }

    // =========================================================================
    // format_usd tests
    // =========================================================================

    #[test]
    fn format_usd_pads_cents() {
        assert_eq!(format_usd(dec!(2)), "$2.00");
        assert_eq!(format_usd(dec!(2.5)), "$2.50");
    }

    #[test]
    fn format_usd_groups_thousands() {
        assert_eq!(format_usd(dec!(1234567.89)), "$1,234,567.89");
    }

    #[test]
    fn format_usd_rounds_half_up() {
        assert_eq!(format_usd(dec!(2.005)), "$2.01");
        assert_eq!(format_usd(dec!(2.004)), "$2.00");
    }

    #[test]
    fn format_usd_handles_negative_amounts() {
        assert_eq!(format_usd(dec!(-1.50)), "-$1.50");
    }

    #[test]
    fn format_usd_handles_zero() {
        assert_eq!(format_usd(dec!(0.00)), "$0.00");
    }
}
