//! Locale switching - writes catalog strings into a tagged UI tree
//!
//! This module provides:
//! - The `UiTree` capability and the element types it exposes
//! - `LocaleSwitcher`, which applies a language and marks the active control

pub mod switcher;
pub mod tree;

// Re-export commonly used types
pub use switcher::LocaleSwitcher;
pub use tree::{ElementRole, LanguageControl, TaggedElement, ThemeIcons, UiTree};
