//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Session error: {0}")]
    Session(#[from] ember_session::SessionError),

    #[error("Device error: {0}")]
    Device(#[from] ember_device::DeviceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
