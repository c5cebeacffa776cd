use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::i18n::Language;

/// Persisted key holding the selected language code
pub const LANGUAGE_KEY: &str = "selectedLang";
/// Persisted key holding `"dark"` or `"light"`
pub const THEME_KEY: &str = "theme";

/// Environment variable overriding the preferences directory
pub const PREFS_PATH_ENV: &str = "CHECKOUT_LOCALE_PREFS";

const APP_DIR: &str = "checkout-locale";

/// Theme options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }
}

/// Durable string key-value storage
///
/// Keys are read and written independently; there is no transaction across
/// keys and a reader must tolerate any key being absent.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-process store, lost when the process exits
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One persisted value, stored in its own file
#[derive(Debug, Serialize, Deserialize)]
struct StoredValue {
    value: String,
    updated_at: DateTime<Utc>,
}

/// Directory of JSON files, one per key
///
/// Each write goes to a temporary file that is renamed over the key's file,
/// so writers never see a torn value and a write only ever replaces its own
/// key. Another process writing the same key wins if it wrote last.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Open the store at its default location
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Self::default_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve the preferences directory
    pub fn default_dir() -> Result<PathBuf> {
        if let Ok(explicit) = std::env::var(PREFS_PATH_ENV) {
            if !explicit.trim().is_empty() {
                return Ok(PathBuf::from(explicit));
            }
        }
        Ok(app_config_dir()?.join("preferences"))
    }

    /// File holding `key`
    ///
    /// Keys become file names, so only ASCII letters, digits, `_` and `-`
    /// are accepted.
    pub fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            anyhow::bail!("invalid preference key {key:?}");
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = match self.key_path(key) {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!(error = %e, "skipping read");
                return None;
            }
        };

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read preference");
                return None;
            }
        };

        match serde_json::from_str::<StoredValue>(&content) {
            Ok(stored) => Some(stored.value),
            Err(e) => {
                // Treat a corrupted value as never written
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed preference");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;

        // Ensure the directory exists
        fs::create_dir_all(&self.dir)?;

        let stored = StoredValue {
            value: value.to_string(),
            updated_at: Utc::now(),
        };
        let mut file = NamedTempFile::new_in(&self.dir)?;
        serde_json::to_writer_pretty(&mut file, &stored)?;
        file.flush()?;
        file.persist(&path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Store picked at launch
///
/// Falls back to an in-memory session when the preferences directory cannot
/// be located, so choices still work until the app exits.
#[derive(Debug, Clone)]
pub enum SessionStore {
    File(FileStore),
    Memory(MemoryStore),
}

impl SessionStore {
    pub fn open_default() -> Self {
        Self::from_located(FileStore::open_default())
    }

    pub fn from_located(located: Result<FileStore>) -> Self {
        match located {
            Ok(store) => {
                tracing::info!(dir = %store.dir().display(), "using preferences directory");
                SessionStore::File(store)
            }
            Err(e) => {
                tracing::warn!(error = %e, "preferences will not be saved this session");
                SessionStore::Memory(MemoryStore::new())
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, SessionStore::File(_))
    }
}

impl KeyValueStore for SessionStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            SessionStore::File(store) => store.get(key),
            SessionStore::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            SessionStore::File(store) => store.set(key, value),
            SessionStore::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match self {
            SessionStore::File(store) => store.remove(key),
            SessionStore::Memory(store) => store.remove(key),
        }
    }
}

/// Application configuration directory, following XDG when set
pub fn app_config_dir() -> Result<PathBuf> {
    // Use XDG config directory standard or fallback to ~/.config
    let config_dir = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg_config) if !xdg_config.is_empty() => PathBuf::from(xdg_config),
        _ => dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?
            .join(".config"),
    };

    Ok(config_dir.join(APP_DIR))
}

/// Language and theme preferences over a key-value store
#[derive(Debug, Clone)]
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persisted language, `None` on first run or for an unknown code
    pub fn get_language(&self) -> Option<Language> {
        let raw = self.store.get(LANGUAGE_KEY)?;
        let language = Language::from_code(&raw);
        if language.is_none() {
            tracing::warn!(value = %raw, "ignoring unsupported persisted language");
        }
        language
    }

    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.store.set(LANGUAGE_KEY, language.code())
    }

    /// Persisted theme, `None` when unset or unrecognised
    pub fn get_theme(&self) -> Option<ThemeMode> {
        let raw = self.store.get(THEME_KEY)?;
        let theme = ThemeMode::parse(&raw);
        if theme.is_none() {
            tracing::warn!(value = %raw, "ignoring unsupported persisted theme");
        }
        theme
    }

    pub fn set_theme(&mut self, theme: ThemeMode) -> Result<()> {
        self.store.set(THEME_KEY, theme.as_str())
    }
}
