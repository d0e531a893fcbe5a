//! Console stand-in for an OS share sheet.

use cupcake_core::OrderSharer;
use tracing::info;

/// Presents a "share" by printing the subject and summary to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSharer;

impl OrderSharer for ConsoleSharer {
    fn share(
        &mut self,
        subject: &str,
        summary: &str,
    ) {
        info!(subject, "sharing order");
        println!("--- {subject} ---");
        println!("{summary}");
        println!("---");
    }
}
