//! REPL session handle and port naming
//!
//! Discovery hands back a bare device identifier ("ttyACM0", "COM3"); the
//! full port name the serial layer opens is OS-specific. The dispatch is
//! over a closed set of supported hosts - anything else is a hard error,
//! never a guess.

use crate::Result;

/// Operating systems the device layer knows how to name ports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    /// Linux, macOS and friends: ports live under /dev.
    Posix,
    /// Windows: the identifier (COMn) is already the port name.
    Windows,
}

impl HostOs {
    /// Detect the host this build is running on.
    pub fn detect() -> Result<Self> {
        #[cfg(unix)]
        {
            Ok(HostOs::Posix)
        }
        #[cfg(windows)]
        {
            Ok(HostOs::Windows)
        }
        #[cfg(not(any(unix, windows)))]
        {
            Err(crate::DeviceError::UnsupportedHost)
        }
    }
}

/// An active connection to a device's interactive console. At most one
/// exists per editor; created by attach, dropped by detach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSession {
    port: String,
}

impl DeviceSession {
    /// Build a session for `device_id` using the detected host's naming
    /// convention.
    pub fn attach(device_id: &str) -> Result<Self> {
        Ok(Self::for_host(HostOs::detect()?, device_id))
    }

    /// Build a session for an explicit host. Exposed so the naming policy
    /// is testable on any build target.
    pub fn for_host(host: HostOs, device_id: &str) -> Self {
        let port = match host {
            HostOs::Posix => format!("/dev/{device_id}"),
            HostOs::Windows => device_id.to_string(),
        };

        tracing::debug!(%port, "Resolved REPL port");
        Self { port }
    }

    /// The OS-specific port name the serial layer should open.
    pub fn port(&self) -> &str {
        &self.port
    }
}
