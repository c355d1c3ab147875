//! View collaborator interface
//!
//! The GUI layer is duck-typed from the controller's point of view: it can
//! manage tabs, prompt for paths, show messages, apply a theme and host a
//! REPL pane. This trait pins that capability set down so the real UI and
//! the test doubles implement the same surface.

use std::io;
use std::path::{Path, PathBuf};

use ember_device::DeviceSession;
use ember_session::Theme;

/// An open editable buffer as the controller sees it. `path = None` means
/// an unsaved, untitled buffer. The view owns the live tab; the controller
/// only ever receives snapshots and creation requests of this shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabDescriptor {
    pub path: Option<PathBuf>,
    pub text: String,
}

impl TabDescriptor {
    pub fn new(path: Option<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path,
            text: text.into(),
        }
    }
}

/// Outcome of a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Cancel,
}

/// A window-close notification from the GUI event loop. Calling
/// [`CloseEvent::ignore`] vetoes the close.
#[derive(Debug, Default)]
pub struct CloseEvent {
    ignored: bool,
}

impl CloseEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore(&mut self) {
        self.ignored = true;
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }
}

pub trait View {
    /// Create a new tab holding `text`, bound to `path` when given.
    fn add_tab(&mut self, path: Option<PathBuf>, text: String);

    /// Number of tabs currently open.
    fn tab_count(&self) -> usize;

    /// Snapshot of the active tab, or `None` when no tab is open.
    fn active_tab(&self) -> Option<TabDescriptor>;

    /// Bind the active tab to `path`.
    fn set_active_tab_path(&mut self, path: PathBuf);

    /// Clear the active tab's modified flag.
    fn mark_active_tab_saved(&mut self);

    /// Paths of all open tabs that have one, in tab order.
    fn open_paths(&self) -> Vec<PathBuf>;

    /// Whether any open tab has unsaved modifications.
    fn has_modified_tabs(&self) -> bool;

    /// Ask the user which file to open. `None` means cancelled.
    fn prompt_load_path(&mut self) -> Option<PathBuf>;

    /// Ask the user where to save, starting in `start_dir`. `None` means
    /// cancelled.
    fn prompt_save_path(&mut self, start_dir: &Path) -> Option<PathBuf>;

    /// Show a one-line status message.
    fn show_message(&mut self, message: &str);

    /// Ask the user to confirm a destructive action.
    fn confirm(&mut self, message: &str) -> Confirmation;

    /// Apply a theme to every widget.
    fn set_theme(&mut self, theme: Theme);

    /// Open a REPL pane connected to `session`. Fails when the device is
    /// not ready (for example still booting).
    fn attach_repl(&mut self, session: &DeviceSession) -> io::Result<()>;

    /// Tear down the REPL pane.
    fn detach_repl(&mut self);

    fn zoom_in(&mut self);

    fn zoom_out(&mut self);
}
