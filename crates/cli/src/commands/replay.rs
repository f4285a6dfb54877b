//! Replay a scripted page session.
//!
//! The script is a YAML list of UI events, dispatched in order against one
//! booted widget:
//!
//! ```yaml
//! - event: add-to-cart
//!   control: 0
//! - event: row-control
//!   control: 2
//! - event: toggle-dropdown
//!   dropdown: community
//! ```

use std::path::Path;

use school_mart_storefront::UiEvent;

use super::PageSession;

/// Dispatch every event in `file`, then print the page state.
///
/// # Errors
///
/// Returns an error if the script cannot be read or parsed.
pub fn run(session: &mut PageSession, file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let script = std::fs::read_to_string(file)
        .map_err(|e| format!("Failed to read {}: {e}", file.display()))?;
    let events: Vec<UiEvent> = serde_yaml::from_str(&script)?;

    tracing::info!(path = %file.display(), events = events.len(), "Replaying session");

    let mut ignored = 0usize;
    for event in &events {
        if !session.widget.dispatch(event) {
            ignored += 1;
        }
    }
    if ignored > 0 {
        tracing::warn!(ignored, "Some events did not reach a bound control");
    }

    session.print();
    Ok(())
}
