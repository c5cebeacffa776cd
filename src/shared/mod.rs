/// Shared modules used across the application
pub mod config;
pub mod i18n;
pub mod logging;
pub mod theme;

// Re-export commonly used items
pub use config::{FileStore, KeyValueStore, Preferences, SessionStore, ThemeMode};
pub use i18n::{Catalog, I18n, Language};
pub use theme::{ModernIcons, ModernTheme};
