//! Terminal implementation of the blocking failure alert.

use console::{Term, style};
use crime_hotspots_loader::Notifier;
use dialoguer::Confirm;

/// Prints alerts to stderr. In interactive mode it also waits for the user
/// to acknowledge on `term` before the menu continues.
pub struct TerminalNotifier {
    wait_for_ack: bool,
    term: Term,
}

impl TerminalNotifier {
    pub const fn new(wait_for_ack: bool, term: Term) -> Self {
        Self { wait_for_ack, term }
    }

    /// Asks the user to continue. Returns `false` if the prompt could not
    /// be shown or was declined.
    fn acknowledge(&self) -> bool {
        match Confirm::new()
            .with_prompt("Continue?")
            .default(true)
            .interact_on(&self.term)
        {
            Ok(answer) => answer,
            Err(e) => {
                log::warn!("Failed to read alert acknowledgement: {e}");
                false
            }
        }
    }
}

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        eprintln!();
        eprintln!("{} {message}", style("Error:").red().bold());
        eprintln!();

        if self.wait_for_ack && !self.acknowledge() {
            log::debug!("Alert was not acknowledged");
        }
    }
}
