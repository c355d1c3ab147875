//! Tab restoration planning
//!
//! Turns the paths of a saved session back into tab-creation requests.
//! Files that have gone missing since the last run are skipped silently -
//! the user may well have moved or deleted them on purpose, so a lost file
//! is not a failure worth reporting.

use std::fs;
use std::path::PathBuf;

use crate::view::TabDescriptor;

/// Contents of the single scratch tab shown on a first run, when there is
/// no previous session to restore.
pub const STARTER_SCRIPT: &str = "# Write your code here :-)\n";

/// One tab-creation request per path whose contents are still readable,
/// in saved order.
pub fn recoverable_tabs(paths: &[PathBuf]) -> Vec<TabDescriptor> {
    paths
        .iter()
        .filter_map(|path| match fs::read_to_string(path) {
            Ok(text) => Some(TabDescriptor::new(Some(path.clone()), text)),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Skipping unreadable session file");
                None
            }
        })
        .collect()
}
