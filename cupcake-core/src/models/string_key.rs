use serde::{Deserialize, Serialize};

/// Opaque localization identifier.
///
/// The core never carries display text, only keys; a front-end string table
/// resolves them to whatever language it speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StringKey {
    AppName,
    ChooseFlavor,
    ChoosePickupDate,
    OrderSummary,
    BackButton,
    Cancel,
    Next,
    SendOrder,
    NewCupcakeOrder,
    SubtotalPrice,
    OrderDetails,
    OneCupcake,
    SixCupcakes,
    TwelveCupcakes,
    Vanilla,
    Chocolate,
    RedVelvet,
    SaltedCaramel,
    Coffee,
}

impl StringKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AppName => "app_name",
            Self::ChooseFlavor => "choose_flavor",
            Self::ChoosePickupDate => "choose_pickup_date",
            Self::OrderSummary => "order_summary",
            Self::BackButton => "back_button",
            Self::Cancel => "cancel",
            Self::Next => "next",
            Self::SendOrder => "send",
            Self::NewCupcakeOrder => "new_cupcake_order",
            Self::SubtotalPrice => "subtotal_price",
            Self::OrderDetails => "order_details",
            Self::OneCupcake => "one_cupcake",
            Self::SixCupcakes => "six_cupcakes",
            Self::TwelveCupcakes => "twelve_cupcakes",
            Self::Vanilla => "vanilla",
            Self::Chocolate => "chocolate",
            Self::RedVelvet => "red_velvet",
            Self::SaltedCaramel => "salted_caramel",
            Self::Coffee => "coffee",
        }
    }
}
