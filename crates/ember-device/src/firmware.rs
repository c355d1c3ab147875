//! Collaborator traits for device discovery and firmware images
//!
//! The editor core never constructs firmware binaries or probes USB buses
//! itself; it drives these capability interfaces, implemented by the real
//! flashing library and by test doubles.

use std::path::PathBuf;

/// Locates a connected device.
pub trait DeviceFinder {
    /// Bare serial identifier of a connected device ("ttyACM0", "COM3"),
    /// or `None` when nothing is plugged in.
    fn serial_port(&self) -> Option<String>;

    /// Mount point of a connected device's flash filesystem, or `None`
    /// when nothing is plugged in.
    fn mount_point(&self) -> Option<PathBuf>;
}

/// Firmware image construction and inspection.
pub trait FirmwareTools {
    /// Encode user source for embedding into a firmware image.
    fn hexlify(&self, source: &str) -> String;

    /// Build a complete, flashable image around previously hexlified
    /// source.
    fn embed_source(&self, hexlified: &str) -> String;

    /// Recover the user source embedded in an image, if any.
    fn extract_source(&self, image: &str) -> Option<String>;
}
