//! Option picker shared by the flavor and pickup screens.

use cupcake_core::StringKey;

use crate::strings;

pub struct SelectOptionScreen;

impl SelectOptionScreen {
    /// Renders a numbered option list with the running subtotal and the
    /// Next affordance, which only appears once a selection has been made.
    pub fn render(
        options: &[String],
        selected: Option<&str>,
        subtotal: &str,
        can_proceed: bool,
    ) -> String {
        let mut out = String::new();
        for (index, option) in options.iter().enumerate() {
            let marker = if selected == Some(option.as_str()) { "(x)" } else { "( )" };
            out.push_str(&format!("  {}. {marker} {option}\n", index + 1));
        }
        out.push('\n');
        out.push_str(&strings::subtotal_line(subtotal));
        out.push('\n');
        if can_proceed {
            out.push_str(&format!("[n] {}\n", strings::resolve(StringKey::Next)));
        } else {
            out.push_str("Pick an option to continue\n");
        }
        out
    }

    /// Maps a 1-based menu choice back to the option it names.
    pub fn option_at<'a>(
        options: &'a [String],
        choice: usize,
    ) -> Option<&'a str> {
        let index = choice.checked_sub(1)?;
        options.get(index).map(String::as_str)
    }
}
