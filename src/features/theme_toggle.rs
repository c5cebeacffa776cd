//! Dark/light switch shared with the preference store

use crate::features::locale::UiTree;
use crate::shared::{KeyValueStore, Preferences, ThemeMode};

/// Flip the tree between dark and light, persist the result and sync the
/// sun/moon icons. Returns the new mode.
pub fn toggle_theme<T, S>(tree: &mut T, preferences: &mut Preferences<S>) -> ThemeMode
where
    T: UiTree,
    S: KeyValueStore,
{
    let is_dark = !tree.is_dark_mode();
    tree.set_dark_mode(is_dark);

    let mode = ThemeMode::from_dark(is_dark);
    if let Err(e) = preferences.set_theme(mode) {
        tracing::warn!(theme = mode.as_str(), error = %e, "failed to persist theme");
    }

    update_theme_icon(tree, is_dark);
    tracing::info!(theme = mode.as_str(), "toggled theme");
    mode
}

/// Show the sun in dark mode and the moon in light mode.
///
/// Does nothing on pages without the toggle icons.
pub fn update_theme_icon<T: UiTree>(tree: &mut T, is_dark: bool) {
    let Some(icons) = tree.theme_icons_mut() else {
        tracing::debug!("page has no theme icons");
        return;
    };

    icons.sun_visible = is_dark;
    icons.moon_visible = !is_dark;
}
