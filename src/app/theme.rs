//! Light/dark theme state.
//!
//! The manager owns the current mode and a [`PreferenceStore`] it writes
//! through on every toggle. Another running instance converges by having a
//! watcher (wired in `main`) call [`ThemeManager::refresh`] whenever the
//! stored preference changes underneath us.

use std::cell::RefCell;
use std::rc::Rc;

use super::settings::{AppSettings, ThemeMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Where the explicit theme preference lives.
///
/// `load` returns `None` when the user never chose a mode; `store` must not
/// fail from the caller's point of view: implementations degrade to
/// in-memory state when the backing storage is unavailable.
pub trait PreferenceStore {
    fn load(&self) -> Option<Theme>;
    fn store(&mut self, theme: Theme);
}

/// Production store: the `theme_mode` field of the settings file.
pub struct SettingsStore {
    settings: Rc<RefCell<AppSettings>>,
    warned: bool,
}

impl SettingsStore {
    pub fn new(settings: Rc<RefCell<AppSettings>>) -> Self {
        Self { settings, warned: false }
    }
}

impl PreferenceStore for SettingsStore {
    fn load(&self) -> Option<Theme> {
        // Re-read from disk so a preference written by another running
        // instance wins over our cached copy.
        match AppSettings::load().theme_mode {
            ThemeMode::Light => Some(Theme::Light),
            ThemeMode::Dark => Some(Theme::Dark),
            ThemeMode::SystemDefault => None,
        }
    }

    fn store(&mut self, theme: Theme) {
        let mut settings = self.settings.borrow_mut();
        settings.theme_mode = match theme {
            Theme::Light => ThemeMode::Light,
            Theme::Dark => ThemeMode::Dark,
        };
        if let Err(e) = settings.save() {
            if !self.warned {
                eprintln!("Failed to persist theme preference: {}. Keeping it in memory.", e);
                self.warned = true;
            }
        }
    }
}

pub struct ThemeManager<S: PreferenceStore> {
    current: Theme,
    store: S,
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Resolve the initial mode: explicit preference if one was stored,
    /// otherwise the OS-level preference.
    pub fn init(store: S, system_dark: bool) -> Self {
        let fallback = if system_dark { Theme::Dark } else { Theme::Light };
        let current = store.load().unwrap_or(fallback);
        Self { current, store }
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    /// Flip the mode and write it through the store. Returns the new mode.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.flipped();
        self.store.store(self.current);
        self.current
    }

    /// Re-read the stored preference after an external change notification.
    /// Returns the new mode if it differs from the current one. Safe to call
    /// redundantly; a notification caused by our own write is a no-op.
    pub fn refresh(&mut self) -> Option<Theme> {
        let stored = self.store.load()?;
        if stored == self.current {
            return None;
        }
        self.current = stored;
        Some(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test double standing in for the settings file.
    struct MemoryStore {
        value: Option<Theme>,
        writable: bool,
    }

    impl MemoryStore {
        fn empty() -> Self {
            Self { value: None, writable: true }
        }

        fn with(theme: Theme) -> Self {
            Self { value: Some(theme), writable: true }
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Option<Theme> {
            self.value
        }

        fn store(&mut self, theme: Theme) {
            if self.writable {
                self.value = Some(theme);
            }
        }
    }

    #[test]
    fn test_init_prefers_stored_value() {
        let mgr = ThemeManager::init(MemoryStore::with(Theme::Dark), false);
        assert_eq!(mgr.theme(), Theme::Dark);
    }

    #[test]
    fn test_init_falls_back_to_system_preference() {
        let mgr = ThemeManager::init(MemoryStore::empty(), true);
        assert_eq!(mgr.theme(), Theme::Dark);

        let mgr = ThemeManager::init(MemoryStore::empty(), false);
        assert_eq!(mgr.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut mgr = ThemeManager::init(MemoryStore::with(Theme::Light), false);
        let original = mgr.theme();
        mgr.toggle();
        mgr.toggle();
        assert_eq!(mgr.theme(), original);
    }

    #[test]
    fn test_toggle_writes_through() {
        let mut mgr = ThemeManager::init(MemoryStore::with(Theme::Light), false);
        let new = mgr.toggle();
        assert_eq!(new, Theme::Dark);
        assert_eq!(mgr.store.value, Some(Theme::Dark));
    }

    #[test]
    fn test_refresh_converges_to_external_change() {
        let mut mgr = ThemeManager::init(MemoryStore::with(Theme::Light), false);
        // Another instance wrote Dark behind our back
        mgr.store.value = Some(Theme::Dark);
        assert_eq!(mgr.refresh(), Some(Theme::Dark));
        assert_eq!(mgr.theme(), Theme::Dark);
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let mut mgr = ThemeManager::init(MemoryStore::with(Theme::Dark), false);
        // Notification caused by our own write: nothing changes
        assert_eq!(mgr.refresh(), None);
        assert_eq!(mgr.refresh(), None);
        assert_eq!(mgr.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_survives_unwritable_store() {
        let store = MemoryStore { value: Some(Theme::Light), writable: false };
        let mut mgr = ThemeManager::init(store, false);
        // The write is lost but the in-memory mode still flips
        assert_eq!(mgr.toggle(), Theme::Dark);
        assert_eq!(mgr.theme(), Theme::Dark);
        assert_eq!(mgr.store.value, Some(Theme::Light));
    }
}
