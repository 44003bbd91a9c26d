use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Recently opened directories, persisted across sessions
// ---------------------------------------------------------------------------

const MAX_ENTRIES: usize = 10;

/// Most-recently-used directory list, newest first, deduplicated and capped.
/// The only state this application keeps across restarts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpenHistory {
    entries: Vec<PathBuf>,
}

impl OpenHistory {
    /// Load from the user config directory; any failure degrades to an
    /// empty history.
    pub fn load() -> Self {
        let Some(path) = Self::storage_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                log::warn!("ignoring malformed history file '{}': {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Persist to the user config directory. Failures are logged, not fatal.
    pub fn save(&self) {
        let Some(path) = Self::storage_path() else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("could not create '{}': {e}", parent.display());
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(text) => {
                if let Err(e) = std::fs::write(&path, text) {
                    log::warn!("could not write history '{}': {e}", path.display());
                }
            }
            Err(e) => log::warn!("could not serialize history: {e}"),
        }
    }

    fn storage_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("embed-scope").join("open_history.json"))
    }

    /// Move `dir` to the front, dropping duplicates and excess entries.
    pub fn update(&mut self, dir: &Path) {
        self.entries.retain(|p| p != dir);
        self.entries.insert(0, dir.to_path_buf());
        self.entries.truncate(MAX_ENTRIES);
    }

    /// The most recently opened directory, used to seed the folder dialog.
    pub fn last_dir(&self) -> Option<&Path> {
        self.entries.first().map(PathBuf::as_path)
    }
}
