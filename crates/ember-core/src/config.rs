//! Editor configuration

use std::path::PathBuf;

/// Process-wide locations, resolved once at startup and passed to the
/// controller rather than read from ambient globals.
#[derive(Debug, Clone)]
pub struct Config {
    /// Per-user application data directory (holds the session file).
    pub data_dir: PathBuf,
    /// Default directory for the user's scripts; save prompts start here.
    pub workspace_dir: PathBuf,
    /// Path of the persisted session record.
    pub session_file: PathBuf,
}

impl Config {
    pub fn new(data_dir: PathBuf, workspace_dir: PathBuf) -> Self {
        Self {
            session_file: data_dir.join("session.json"),
            data_dir,
            workspace_dir,
        }
    }

    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("ember"))
            .unwrap_or_else(|| PathBuf::from(".ember"))
    }

    pub fn default_workspace_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join("micropython"))
            .unwrap_or_else(|| PathBuf::from("micropython"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::default_data_dir(), Self::default_workspace_dir())
    }
}

// Simple dirs implementation for common directories
mod dirs {
    use std::path::PathBuf;

    pub fn home_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("USERPROFILE").ok().map(PathBuf::from)
        }
        #[cfg(not(target_os = "windows"))]
        {
            std::env::var("HOME").ok().map(PathBuf::from)
        }
    }

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_file_lives_in_data_dir() {
        let config = Config::new(PathBuf::from("/data"), PathBuf::from("/scripts"));
        assert_eq!(config.session_file, PathBuf::from("/data/session.json"));
        assert_eq!(config.workspace_dir, PathBuf::from("/scripts"));
    }
}
