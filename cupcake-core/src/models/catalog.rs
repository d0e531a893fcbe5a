//! The fixed offer: quantity packages and flavors.

use super::string_key::StringKey;

/// Quantity packages on offer, as (label key, cupcake count) pairs.
pub const QUANTITY_OPTIONS: [(StringKey, u32); 3] = [
    (StringKey::OneCupcake, 1),
    (StringKey::SixCupcakes, 6),
    (StringKey::TwelveCupcakes, 12),
];

/// Flavors on offer, in menu order.
pub const FLAVORS: [StringKey; 5] = [
    StringKey::Vanilla,
    StringKey::Chocolate,
    StringKey::RedVelvet,
    StringKey::SaltedCaramel,
    StringKey::Coffee,
];

/// Whether `quantity` is one of the offered package sizes.
pub fn offers_quantity(quantity: u32) -> bool {
    QUANTITY_OPTIONS.iter().any(|(_, count)| *count == quantity)
}
