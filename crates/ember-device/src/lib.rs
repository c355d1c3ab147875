//! EMBER Device Layer
//!
//! Everything the editor needs to talk about an attached microcontroller:
//! OS-specific serial port naming, the REPL session handle, and the traits
//! the GUI/flashing layers implement for device discovery and firmware
//! image handling. The serial transport itself lives outside this crate.

mod error;
mod firmware;
mod session;

pub use error::DeviceError;
pub use firmware::{DeviceFinder, FirmwareTools};
pub use session::{DeviceSession, HostOs};

pub type Result<T> = std::result::Result<T, DeviceError>;
