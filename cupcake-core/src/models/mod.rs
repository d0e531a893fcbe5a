mod catalog;
mod order;
mod string_key;

pub use catalog::{FLAVORS, QUANTITY_OPTIONS, offers_quantity};
pub use order::OrderState;
pub use string_key::StringKey;
