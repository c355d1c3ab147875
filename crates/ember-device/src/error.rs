//! Device error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeviceError {
    /// Attaching while a REPL session already exists is a caller bug, not
    /// a user-facing condition.
    #[error("A REPL session is already attached")]
    AlreadyAttached,

    /// Detaching with no session present is likewise a caller bug.
    #[error("No REPL session is attached")]
    NotAttached,

    #[error("Device access is not supported on this operating system")]
    UnsupportedHost,
}
