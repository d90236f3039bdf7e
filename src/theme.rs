//! Light/dark theme state and its persistence.
//!
//! The flag lives in a [`KeyValueStore`] under [`config::THEME_STORAGE_KEY`]
//! as a JSON boolean (`true` means dark). Reading never fails from the
//! caller's point of view: a missing or unreadable value falls back to the
//! configured default.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

use crate::config;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage call failed: {0}")]
    Js(String),
    #[error("malformed stored value: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        StorageError::Js(format!("{:?}", value))
    }
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = window.local_storage()?.ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.storage.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(self.storage.set_item(key, value)?)
    }
}

/// In-memory store. Clones share the same map, so a clone handed to a second
/// controller sees what the first one wrote.
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Local storage when the browser allows it, otherwise a session-only map
/// (private browsing, storage disabled).
pub enum BrowserStore {
    Local(LocalStore),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match LocalStore::open() {
            Ok(store) => BrowserStore::Local(store),
            Err(e) => {
                warn!("Falling back to in-memory theme storage: {}", e);
                BrowserStore::Memory(MemoryStore::default())
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            BrowserStore::Local(store) => store.get(key),
            BrowserStore::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            BrowserStore::Local(store) => store.set(key, value),
            BrowserStore::Memory(store) => store.set(key, value),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        Theme::from_dark_flag(!self.is_dark())
    }
}

pub struct ThemeController<S> {
    store: S,
    theme: Theme,
}

impl<S: KeyValueStore> ThemeController<S> {
    /// Restores the persisted theme, or `default` when nothing usable is stored.
    pub fn load(store: S, default: Theme) -> Self {
        let theme = match read_theme(&store) {
            Ok(Some(theme)) => theme,
            Ok(None) => default,
            Err(e) => {
                warn!("Ignoring stored theme: {}", e);
                default
            }
        };
        debug!("Theme loaded: {:?}", theme);
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = write_theme(&self.store, self.theme) {
            warn!("Failed to persist theme: {}", e);
        }
        self.theme
    }
}

fn read_theme<S: KeyValueStore>(store: &S) -> Result<Option<Theme>, StorageError> {
    match store.get(config::THEME_STORAGE_KEY)? {
        Some(raw) => {
            let dark: bool = serde_json::from_str(&raw)?;
            Ok(Some(Theme::from_dark_flag(dark)))
        }
        None => Ok(None),
    }
}

fn write_theme<S: KeyValueStore>(store: &S, theme: Theme) -> Result<(), StorageError> {
    let raw = serde_json::to_string(&theme.is_dark())?;
    store.set(config::THEME_STORAGE_KEY, &raw)
}

/// Puts the `dark` class on `<html>` for dark mode and removes it otherwise.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    if let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() {
        let scheme = if theme.is_dark() { "dark" } else { "light" };
        let _ = root.style().set_property("color-scheme", scheme);
    }
}

/// Published by the root component; `toggle` is the only way to change the theme.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext {
        theme: config::DEFAULT_THEME,
        toggle: Callback::from(|_| ()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_store_uses_default() {
        let controller = ThemeController::load(MemoryStore::default(), Theme::Dark);
        assert_eq!(controller.theme(), Theme::Dark);

        let controller = ThemeController::load(MemoryStore::default(), Theme::Light);
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn toggle_persists_across_reload() {
        let store = MemoryStore::default();

        let mut controller = ThemeController::load(store.clone(), Theme::Dark);
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(
            store.get(config::THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("false")
        );

        let reloaded = ThemeController::load(store, Theme::Dark);
        assert_eq!(reloaded.theme(), Theme::Light);
    }

    #[test]
    fn stored_value_wins_over_default() {
        let store = MemoryStore::default();
        store.set(config::THEME_STORAGE_KEY, "true").unwrap();

        let controller = ThemeController::load(store, Theme::Light);
        assert_eq!(controller.theme(), Theme::Dark);
    }

    #[test]
    fn malformed_value_falls_back_to_default() {
        let store = MemoryStore::default();
        store.set(config::THEME_STORAGE_KEY, "\"dark\"").unwrap();
        let controller = ThemeController::load(store.clone(), Theme::Dark);
        assert_eq!(controller.theme(), Theme::Dark);

        store.set(config::THEME_STORAGE_KEY, "not json").unwrap();
        let controller = ThemeController::load(store, Theme::Light);
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn double_toggle_restores_theme() {
        let store = MemoryStore::default();
        let mut controller = ThemeController::load(store.clone(), Theme::Light);
        controller.toggle();
        controller.toggle();
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(
            store.get(config::THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("false")
        );
    }
}
