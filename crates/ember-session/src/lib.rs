//! EMBER Session Persistence
//!
//! A session is the editor state worth carrying across runs: the active
//! theme and the ordered list of file paths open in tabs. It is read once
//! at startup and written once at shutdown - there is no incremental
//! persistence while the editor runs.

mod error;
mod record;
mod store;

pub use error::SessionError;
pub use record::{SessionRecord, Theme};
pub use store::SessionStore;

pub type Result<T> = std::result::Result<T, SessionError>;
