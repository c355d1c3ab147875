//! Editor controller
//!
//! Thin orchestration over the session store, the device layer and the
//! view. Everything here runs synchronously on the UI's main thread in
//! response to a single user action; the only state the controller owns is
//! the current theme and the REPL session, if one is attached.

use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

use ember_device::{DeviceError, DeviceFinder, DeviceSession, FirmwareTools};
use ember_session::{SessionError, SessionRecord, SessionStore, Theme};

use crate::config::Config;
use crate::restore::{recoverable_tabs, STARTER_SCRIPT};
use crate::view::{CloseEvent, Confirmation, View};
use crate::Result;

/// Extension of recognised source files.
pub const SOURCE_EXTENSION: &str = "py";

/// Extension of recognised firmware images.
pub const FIRMWARE_EXTENSION: &str = "hex";

/// Filename the flashed image is written to under the device mount point.
pub const FLASH_FILENAME: &str = "micropython.hex";

/// Status line shown whenever an operation needs a device and none is
/// plugged in.
pub const NO_DEVICE_MESSAGE: &str = "Could not find an attached device.";

/// What `quit` decided; the GUI shell maps `Exit` to process termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitOutcome {
    /// The user cancelled the quit; nothing was written.
    Cancelled,
    /// The session was saved; terminate the process with this status.
    Exit(i32),
}

pub struct Editor<V, D, F> {
    view: V,
    finder: D,
    firmware: F,
    store: SessionStore,
    config: Config,
    theme: Theme,
    repl: Option<DeviceSession>,
}

impl<V, D, F> Editor<V, D, F>
where
    V: View,
    D: DeviceFinder,
    F: FirmwareTools,
{
    /// Set up a controller, creating the workspace and data directories if
    /// they do not already exist.
    pub fn new(config: Config, view: V, finder: D, firmware: F) -> Result<Self> {
        fs::create_dir_all(&config.workspace_dir)?;
        fs::create_dir_all(&config.data_dir)?;

        let store = SessionStore::new(&config.session_file);

        tracing::info!(
            data_dir = %config.data_dir.display(),
            workspace_dir = %config.workspace_dir.display(),
            "Editor initialized"
        );

        Ok(Self {
            view,
            finder,
            firmware,
            store,
            config,
            theme: Theme::default(),
            repl: None,
        })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn repl(&self) -> Option<&DeviceSession> {
        self.repl.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    // === Session restoration ===

    /// Restore the previous session: one tab per still-readable saved path,
    /// then the saved theme, applied exactly once. With no session file at
    /// all, fall back to a single starter tab - but only when the view has
    /// no tabs yet, so repeated restoration never duplicates it.
    pub fn restore_session(&mut self) -> Result<()> {
        match self.store.load() {
            Ok(record) => {
                self.theme = record.theme;
                let tabs = recoverable_tabs(&record.paths);
                tracing::info!(
                    saved = record.paths.len(),
                    restored = tabs.len(),
                    "Restoring session"
                );
                for tab in tabs {
                    self.view.add_tab(tab.path, tab.text);
                }
                self.view.set_theme(self.theme);
            }
            Err(SessionError::NotFound(_)) => {
                tracing::info!("No previous session, starting fresh");
                if self.view.tab_count() == 0 {
                    self.view.add_tab(None, STARTER_SCRIPT.to_string());
                }
            }
            Err(e) => return Err(e.into()),
        }

        Ok(())
    }

    // === Tab and file operations ===

    /// Open a new untitled, empty tab.
    pub fn new_tab(&mut self) {
        self.view.add_tab(None, String::new());
    }

    /// Prompt for a file and open it in a tab. Source files are loaded
    /// verbatim; firmware images have their embedded source extracted into
    /// an untitled tab. Unreadable or unrecognised files are ignored.
    pub fn load_file(&mut self) {
        let Some(path) = self.view.prompt_load_path() else {
            return;
        };

        match path.extension().and_then(OsStr::to_str) {
            Some(SOURCE_EXTENSION) => match fs::read_to_string(&path) {
                Ok(text) => self.view.add_tab(Some(path), text),
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "Could not load file");
                }
            },
            Some(FIRMWARE_EXTENSION) => match fs::read_to_string(&path) {
                Ok(image) => {
                    // The image, not the source inside it, lives at `path`,
                    // so the recovered tab stays untitled.
                    if let Some(source) = self.firmware.extract_source(&image) {
                        self.view.add_tab(None, source);
                    } else {
                        tracing::debug!(path = %path.display(), "No source embedded in image");
                    }
                }
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "Could not load image");
                }
            },
            _ => {
                tracing::debug!(path = %path.display(), "Unrecognised file type");
            }
        }
    }

    /// Save the active tab's text to its path, prompting for one when
    /// unset. Cancelling the prompt leaves the tab untouched. A path
    /// without the source extension gets it appended before writing.
    pub fn save_active_tab(&mut self) -> Result<()> {
        let Some(tab) = self.view.active_tab() else {
            return Ok(());
        };

        let path = match tab.path {
            Some(path) => path,
            None => {
                let prompted = self.view.prompt_save_path(&self.config.workspace_dir);
                match prompted {
                    Some(path) if !path.as_os_str().is_empty() => path,
                    _ => return Ok(()),
                }
            }
        };

        let path = ensure_source_extension(path);
        self.view.set_active_tab_path(path.clone());
        fs::write(&path, &tab.text)?;
        self.view.mark_active_tab_saved();

        tracing::info!(path = %path.display(), "Saved tab");
        Ok(())
    }

    // === Device operations ===

    /// Attach a REPL session to a connected device and hand it to the view.
    /// A missing or mid-boot device is reported to the user; attaching
    /// while a session exists is a caller bug and fails hard.
    pub fn attach_repl(&mut self) -> Result<()> {
        if self.repl.is_some() {
            return Err(DeviceError::AlreadyAttached.into());
        }

        let Some(device_id) = self.finder.serial_port() else {
            self.view.show_message(NO_DEVICE_MESSAGE);
            return Ok(());
        };

        let session = DeviceSession::attach(&device_id)?;
        match self.view.attach_repl(&session) {
            Ok(()) => {
                tracing::info!(port = session.port(), "REPL attached");
                self.repl = Some(session);
            }
            Err(e) => {
                // Typically the device is still booting; tell the user and
                // leave the controller unchanged.
                self.view.show_message(&e.to_string());
            }
        }

        Ok(())
    }

    /// Tear down the active REPL session. Detaching with none present is a
    /// caller bug and fails hard.
    pub fn detach_repl(&mut self) -> Result<()> {
        if self.repl.is_none() {
            return Err(DeviceError::NotAttached.into());
        }

        self.view.detach_repl();
        self.repl = None;
        tracing::info!("REPL detached");
        Ok(())
    }

    /// Attach if no REPL session exists, detach otherwise.
    pub fn toggle_repl(&mut self) -> Result<()> {
        if self.repl.is_some() {
            self.detach_repl()
        } else {
            self.attach_repl()
        }
    }

    /// Build a firmware image around the active tab's text and write it to
    /// the connected device's mount point. No tab means nothing to flash;
    /// no device or a write fault is reported as a status message.
    pub fn flash_firmware(&mut self) {
        let Some(tab) = self.view.active_tab() else {
            return;
        };

        let image = self.firmware.embed_source(&self.firmware.hexlify(&tab.text));

        let Some(mount) = self.finder.mount_point() else {
            self.view.show_message(NO_DEVICE_MESSAGE);
            return;
        };

        let target = mount.join(FLASH_FILENAME);
        match fs::write(&target, image) {
            Ok(()) => {
                tracing::info!(target = %target.display(), "Flashed firmware");
                self.view
                    .show_message(&format!("Flashed code to {}.", target.display()));
            }
            Err(e) => {
                self.view.show_message(&e.to_string());
            }
        }
    }

    // === Theme ===

    /// Flip between the two themes and push the result to the view.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.view.set_theme(self.theme);
    }

    // === Zoom ===

    pub fn zoom_in(&mut self) {
        self.view.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.view.zoom_out();
    }

    // === Quit ===

    /// Quit the editor. Unsaved modifications require confirmation first;
    /// cancelling aborts the quit (vetoing `event` when one triggered it)
    /// without writing anything. Otherwise the current theme and every
    /// open tab path are persisted and the shell should exit with the
    /// returned status.
    pub fn quit(&mut self, event: Option<&mut CloseEvent>) -> Result<QuitOutcome> {
        if self.view.has_modified_tabs() {
            let choice = self.view.confirm(
                "There is un-saved work. Quitting will cause you to lose it. Quit anyway?",
            );
            if choice == Confirmation::Cancel {
                if let Some(event) = event {
                    event.ignore();
                }
                return Ok(QuitOutcome::Cancelled);
            }
        }

        let record = SessionRecord::new(self.theme, self.view.open_paths());
        self.store.save(&record)?;

        Ok(QuitOutcome::Exit(0))
    }
}

/// Append the source extension unless the path already carries it.
fn ensure_source_extension(path: PathBuf) -> PathBuf {
    match path.extension().and_then(OsStr::to_str) {
        Some(SOURCE_EXTENSION) => path,
        _ => {
            let mut raw = path.into_os_string();
            raw.push(".");
            raw.push(SOURCE_EXTENSION);
            PathBuf::from(raw)
        }
    }
}
