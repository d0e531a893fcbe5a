//! English string table.
//!
//! The core speaks [`StringKey`]s; this is the collaborator that turns them
//! into display text. One language only.

use cupcake_core::StringKey;

/// Resolves `key` to its display text.
pub fn resolve(key: StringKey) -> &'static str {
    match key {
        StringKey::AppName => "Cupcake",
        StringKey::ChooseFlavor => "Choose Flavor",
        StringKey::ChoosePickupDate => "Choose Pickup Date",
        StringKey::OrderSummary => "Order Summary",
        StringKey::BackButton => "Back",
        StringKey::Cancel => "Cancel",
        StringKey::Next => "Next",
        StringKey::SendOrder => "Send Order to Another App",
        StringKey::NewCupcakeOrder => "New Cupcake Order",
        StringKey::SubtotalPrice => "Subtotal {price}",
        StringKey::OrderDetails => {
            "Quantity: {quantity} cupcakes\nFlavor: {flavor}\nPickup date: {date}\nTotal: {price}\n\nThank you!"
        }
        StringKey::OneCupcake => "One Cupcake",
        StringKey::SixCupcakes => "Six Cupcakes",
        StringKey::TwelveCupcakes => "Twelve Cupcakes",
        StringKey::Vanilla => "Vanilla",
        StringKey::Chocolate => "Chocolate",
        StringKey::RedVelvet => "Red Velvet",
        StringKey::SaltedCaramel => "Salted Caramel",
        StringKey::Coffee => "Coffee",
    }
}

/// Fills the subtotal template.
pub fn subtotal_line(price: &str) -> String {
    resolve(StringKey::SubtotalPrice).replace("{price}", price)
}

/// Fills the order-details template shown on the summary screen and shared
/// on send.
pub fn order_details(
    quantity: u32,
    flavor: &str,
    date: &str,
    price: &str,
) -> String {
    resolve(StringKey::OrderDetails)
        .replace("{quantity}", &quantity.to_string())
        .replace("{flavor}", flavor)
        .replace("{date}", date)
        .replace("{price}", price)
}
