//! Theme preference resolution, application, and persistence.
//!
//! The controller owns the applied preference explicitly instead of scattering
//! it across global state: `initialize` resolves it once at startup (persisted
//! value, then the platform color-scheme signal, then light), `toggle` flips
//! and persists it. The store behind it is a trait so tests can swap in an
//! in-memory double.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The binary display preference. Serialized as `"light"` / `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    /// The other preference. Toggling is always an involution.
    pub fn complement(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown theme preference '{0}', expected 'light' or 'dark'")]
pub struct ParseThemeError(String);

impl FromStr for ThemePreference {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Durable single-key storage for the theme preference.
///
/// Carried in `ThemeController` as `Box<dyn PreferenceStore>`.
pub trait PreferenceStore: Send + Sync {
    /// Returns the persisted preference, or `None` if nothing was ever saved.
    fn load(&self) -> Result<Option<ThemePreference>, AppError>;
    fn save(&self, pref: ThemePreference) -> Result<(), AppError>;
}

/// On-disk shape of the state file: `{"theme":"dark"}`.
#[derive(Debug, Serialize, Deserialize)]
struct ThemeState {
    theme: ThemePreference,
}

/// Production store: one small JSON file at a configured path.
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Option<ThemePreference>, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // A missing file is the "never saved" case, not an error.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::Store(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };
        let state: ThemeState = serde_json::from_str(&raw).map_err(|e| {
            AppError::Store(format!("corrupt state file {}: {e}", self.path.display()))
        })?;
        Ok(Some(state.theme))
    }

    fn save(&self, pref: ThemePreference) -> Result<(), AppError> {
        let state = ThemeState { theme: pref };
        let raw = serde_json::to_string(&state).map_err(AppError::Document)?;
        fs::write(&self.path, raw).map_err(|e| {
            AppError::Store(format!(
                "failed to write {}: {e}",
                self.path.display()
            ))
        })
    }
}

/// Owns the applied preference and the store behind it.
pub struct ThemeController {
    store: Box<dyn PreferenceStore>,
    applied: RwLock<ThemePreference>,
}

impl ThemeController {
    /// Resolves the startup preference: persisted value first, then the
    /// platform color-scheme signal, then light.
    pub fn initialize(
        store: Box<dyn PreferenceStore>,
        system_prefers_dark: bool,
    ) -> Result<Self, AppError> {
        let resolved = match store.load()? {
            Some(saved) => saved,
            None if system_prefers_dark => ThemePreference::Dark,
            None => ThemePreference::Light,
        };
        Ok(Self {
            store,
            applied: RwLock::new(resolved),
        })
    }

    /// The currently applied preference, rendered into the page as the
    /// root element's `data-theme` attribute.
    pub fn applied(&self) -> ThemePreference {
        *self.applied.read().unwrap()
    }

    /// Flips the applied preference and persists the new value.
    /// Persists before applying, so a store failure leaves the applied
    /// preference unchanged.
    pub fn toggle(&self) -> Result<ThemePreference, AppError> {
        let mut applied = self.applied.write().unwrap();
        let next = applied.complement();
        self.store.save(next)?;
        *applied = next;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// In-memory store double. `fail_saves` makes every save error.
    struct MemoryStore {
        saved: Mutex<Option<ThemePreference>>,
        fail_saves: bool,
    }

    impl MemoryStore {
        fn empty() -> Self {
            Self {
                saved: Mutex::new(None),
                fail_saves: false,
            }
        }

        fn with(pref: ThemePreference) -> Self {
            Self {
                saved: Mutex::new(Some(pref)),
                fail_saves: false,
            }
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Result<Option<ThemePreference>, AppError> {
            Ok(*self.saved.lock().unwrap())
        }

        fn save(&self, pref: ThemePreference) -> Result<(), AppError> {
            if self.fail_saves {
                return Err(AppError::Store("save disabled".to_string()));
            }
            *self.saved.lock().unwrap() = Some(pref);
            Ok(())
        }
    }

    #[test]
    fn test_persisted_preference_wins_over_system_signal() {
        let controller = ThemeController::initialize(
            Box::new(MemoryStore::with(ThemePreference::Light)),
            true,
        )
        .unwrap();
        assert_eq!(controller.applied(), ThemePreference::Light);
    }

    #[test]
    fn test_system_dark_signal_applies_when_nothing_persisted() {
        let controller =
            ThemeController::initialize(Box::new(MemoryStore::empty()), true).unwrap();
        assert_eq!(controller.applied(), ThemePreference::Dark);
    }

    #[test]
    fn test_default_is_light() {
        let controller =
            ThemeController::initialize(Box::new(MemoryStore::empty()), false).unwrap();
        assert_eq!(controller.applied(), ThemePreference::Light);
    }

    #[test]
    fn test_toggle_flips_applied_and_persisted() {
        let controller = ThemeController::initialize(
            Box::new(MemoryStore::with(ThemePreference::Dark)),
            false,
        )
        .unwrap();
        let next = controller.toggle().unwrap();
        assert_eq!(next, ThemePreference::Light);
        assert_eq!(controller.applied(), ThemePreference::Light);
        assert_eq!(
            controller.store.load().unwrap(),
            Some(ThemePreference::Light),
            "toggle must persist the new value"
        );
    }

    #[test]
    fn test_toggle_twice_returns_to_start() {
        let controller =
            ThemeController::initialize(Box::new(MemoryStore::empty()), false).unwrap();
        controller.toggle().unwrap();
        controller.toggle().unwrap();
        assert_eq!(controller.applied(), ThemePreference::Light);
    }

    #[test]
    fn test_failed_save_leaves_applied_unchanged() {
        let store = MemoryStore {
            saved: Mutex::new(Some(ThemePreference::Dark)),
            fail_saves: true,
        };
        let controller = ThemeController::initialize(Box::new(store), false).unwrap();
        assert!(controller.toggle().is_err());
        assert_eq!(
            controller.applied(),
            ThemePreference::Dark,
            "a store failure must not half-toggle"
        );
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("theme.json"));
        assert_eq!(store.load().unwrap(), None);
        store.save(ThemePreference::Dark).unwrap();
        assert_eq!(store.load().unwrap(), Some(ThemePreference::Dark));
        store.save(ThemePreference::Light).unwrap();
        assert_eq!(store.load().unwrap(), Some(ThemePreference::Light));
    }

    #[test]
    fn test_file_store_rejects_corrupt_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FilePreferenceStore::new(path);
        assert!(store.load().is_err());
    }
}
