//! Preference Store
//!
//! Owns the single persisted display preference: the dark-mode flag.
//! The flag lives in one file whose entire content is the literal
//! string `true` or `false`. Hydration happens once at construction and
//! cannot fail: missing or unreadable storage falls back to the
//! default, so callers never observe an uninitialized value. Writes are
//! serialized through a mutex held for the duration of the persist.

use std::path::PathBuf;
use std::sync::Mutex;

/// Default value of the dark-mode flag when nothing is stored.
pub const DEFAULT_DARK_MODE: bool = false;

/// File name of the persisted flag under the data directory.
const PREFS_FILE: &str = "dark_mode";

/// Errors surfaced by the preference store
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    /// Persisting the flag failed. The in-memory value still changed
    /// and remains the session's effective value; the caller may retry.
    #[error("Failed to persist preference to {path:?}: {error}")]
    Persist { path: PathBuf, error: String },
}

/// Single-writer store for the dark-mode preference.
pub struct PreferenceStore {
    path: PathBuf,
    dark_mode: Mutex<bool>,
}

impl PreferenceStore {
    /// Hydrate the store from the given file.
    ///
    /// Anything other than the exact literal `true` or `false` in
    /// storage (including an absent file) hydrates to the default.
    pub fn hydrate(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let dark_mode = match std::fs::read_to_string(&path) {
            Ok(content) => match content.trim() {
                "true" => true,
                "false" => false,
                other => {
                    tracing::warn!(
                        path = %path.display(),
                        content = other,
                        "Unrecognized preference value, using default"
                    );
                    DEFAULT_DARK_MODE
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => DEFAULT_DARK_MODE,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Could not read preference storage, using default"
                );
                DEFAULT_DARK_MODE
            }
        };

        Self {
            path,
            dark_mode: Mutex::new(dark_mode),
        }
    }

    /// Hydrate from the default location under the user data directory.
    pub fn hydrate_default() -> Self {
        Self::hydrate(default_prefs_path())
    }

    /// Current value of the dark-mode flag.
    pub fn dark_mode(&self) -> bool {
        *self.dark_mode.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Flip the flag, persist the new value, and return it.
    ///
    /// Two consecutive toggles restore the original value. On persist
    /// failure the flipped value stays effective in memory and the
    /// error is returned so the caller can retry or warn.
    pub fn toggle(&self) -> Result<bool, PrefsError> {
        let mut guard = self.dark_mode.lock().unwrap_or_else(|e| e.into_inner());
        *guard = !*guard;
        let value = *guard;

        // Persist while still holding the lock so writes never interleave.
        self.persist(value)?;
        Ok(value)
    }

    fn persist(&self, value: bool) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PrefsError::Persist {
                path: self.path.clone(),
                error: e.to_string(),
            })?;
        }

        let literal = if value { "true" } else { "false" };
        std::fs::write(&self.path, literal).map_err(|e| PrefsError::Persist {
            path: self.path.clone(),
            error: e.to_string(),
        })
    }
}

/// Default storage path: `<data dir>/statboard/dark_mode`.
pub fn default_prefs_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("statboard")
        .join(PREFS_FILE)
}
