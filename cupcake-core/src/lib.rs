pub mod flow;
pub mod models;
pub mod navigation;
pub mod pickup;
pub mod pricing;
pub mod store;

pub use flow::{FlowError, OrderFlow, OrderSharer};
pub use models::*;
pub use navigation::{NavError, NavEvent, NavigationController, Screen, transition};
pub use pricing::{PricePolicy, format_usd};
pub use store::{OrderError, OrderStore, Subscription};
