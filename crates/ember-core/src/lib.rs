//! EMBER Core
//!
//! Controller layer for the EMBER editor: session save/restore, tab and
//! file management, theme toggling, and device REPL/flash orchestration.
//! The GUI toolkit, the firmware library and the serial transport are all
//! collaborators behind traits; this crate owns the state and the rules.

mod config;
mod editor;
mod error;
mod restore;
mod view;

pub use config::Config;
pub use editor::{
    Editor, QuitOutcome, FIRMWARE_EXTENSION, FLASH_FILENAME, NO_DEVICE_MESSAGE, SOURCE_EXTENSION,
};
pub use error::CoreError;
pub use restore::{recoverable_tabs, STARTER_SCRIPT};
pub use view::{CloseEvent, Confirmation, TabDescriptor, View};

// Re-export subsystem types
pub use ember_device::{DeviceError, DeviceFinder, DeviceSession, FirmwareTools, HostOs};
pub use ember_session::{SessionError, SessionRecord, SessionStore, Theme};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
