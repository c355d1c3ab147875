//! File-backed session store
//!
//! The backing store is a single JSON object with exactly two top-level
//! keys, e.g. `{"theme": "night", "paths": ["path/foo.py"]}`. Loading is
//! lenient per field: a malformed document or a malformed individual field
//! degrades that field to its default rather than failing the load. Only a
//! missing file is reported, so the caller can distinguish "first run" from
//! "empty session".

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::SessionError;
use crate::record::{SessionRecord, Theme};
use crate::Result;

pub struct SessionStore {
    /// Location of the session file.
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted session.
    ///
    /// Fails with [`SessionError::NotFound`] only when the file is absent.
    /// Anything unparseable inside an existing file is treated as "nothing
    /// to restore" for the affected field.
    pub fn load(&self) -> Result<SessionRecord> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SessionError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(SessionError::Io(e)),
        };

        let record = Self::parse_lenient(&raw);
        tracing::debug!(
            path = %self.path.display(),
            theme = %record.theme,
            tab_count = record.paths.len(),
            "Loaded session"
        );

        Ok(record)
    }

    /// Overwrite the session file with `record`. Exactly `theme` and
    /// `paths` are written; there is no merge with previous contents.
    pub fn save(&self, record: &SessionRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let serialized = serde_json::to_string(record)?;
        fs::write(&self.path, serialized)?;

        tracing::info!(
            path = %self.path.display(),
            theme = %record.theme,
            tab_count = record.paths.len(),
            "Saved session"
        );

        Ok(())
    }

    fn parse_lenient(raw: &str) -> SessionRecord {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Session file is not valid JSON, using defaults");
                return SessionRecord::default();
            }
        };

        let theme = value
            .get("theme")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        let paths = value
            .get("paths")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(PathBuf::from)
                    .collect()
            })
            .unwrap_or_default();

        SessionRecord { theme, paths }
    }
}
