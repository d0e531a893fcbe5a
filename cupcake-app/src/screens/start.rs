//! First screen: pick how many cupcakes to order.

use cupcake_core::QUANTITY_OPTIONS;

use crate::strings;

pub struct StartOrderScreen;

impl StartOrderScreen {
    /// Renders the numbered quantity choices.
    pub fn render() -> String {
        let mut out = String::new();
        for (index, (label, _)) in QUANTITY_OPTIONS.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", index + 1, strings::resolve(*label)));
        }
        out
    }

    /// Maps a 1-based menu choice back to the quantity it offers.
    pub fn quantity_at(choice: usize) -> Option<u32> {
        let index = choice.checked_sub(1)?;
        QUANTITY_OPTIONS.get(index).map(|(_, count)| *count)
    }
}
