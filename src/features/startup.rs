//! Page-ready restore of the persisted language and theme

use crate::features::locale::{LocaleSwitcher, UiTree};
use crate::features::theme_toggle::update_theme_icon;
use crate::shared::{Catalog, KeyValueStore, Language, Preferences, ThemeMode};

/// Apply the persisted language (or `uk`) and the persisted theme (or light).
///
/// The theme is set directly, never flipped.
pub fn startup<T, S>(
    tree: &mut T,
    preferences: &mut Preferences<S>,
    catalog: &Catalog,
) -> (Language, ThemeMode)
where
    T: UiTree,
    S: KeyValueStore,
{
    let missing = catalog.missing_keys();
    if !missing.is_empty() {
        tracing::warn!(count = missing.len(), ?missing, "catalog has untranslated keys");
    }

    let language = preferences.get_language().unwrap_or_default();
    LocaleSwitcher::new(catalog).apply_language(tree, preferences, language);

    let theme = preferences.get_theme().unwrap_or_default();
    tree.set_dark_mode(theme.is_dark());
    update_theme_icon(tree, theme.is_dark());

    tracing::info!(%language, theme = theme.as_str(), "restored preferences");
    (language, theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::checkout::{CheckoutPage, Order};
    use crate::shared::config::{MemoryStore, LANGUAGE_KEY, THEME_KEY};
    use crate::shared::i18n::PAY_KEY;

    #[test]
    fn test_first_run_defaults() {
        let mut page = CheckoutPage::new(Order::demo());
        let mut prefs = Preferences::new(MemoryStore::new());

        let restored = startup(&mut page, &mut prefs, Catalog::global());

        assert_eq!(restored, (Language::Ukrainian, ThemeMode::Light));
        assert_eq!(page.element("title_checkout").unwrap().text(), "Оплата замовлення");
        assert!(!page.is_dark_mode());
        let icons = page.theme_icons().unwrap();
        assert!(icons.moon_visible);
        assert!(!icons.sun_visible);

        // Applying the default language persists it; the theme stays unset
        assert_eq!(prefs.store().get(LANGUAGE_KEY).as_deref(), Some("uk"));
        assert_eq!(prefs.store().get(THEME_KEY), None);
    }

    #[test]
    fn test_restores_english_pay_button() {
        let mut store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "en").unwrap();
        let mut page = CheckoutPage::new(Order::demo());
        let mut prefs = Preferences::new(store);

        startup(&mut page, &mut prefs, Catalog::global());

        assert_eq!(page.element(PAY_KEY).unwrap().text(), "Pay 499.00 ₴");
        let active: Vec<_> = page
            .language_controls()
            .iter()
            .filter(|c| c.is_active())
            .map(|c| c.label())
            .collect();
        assert_eq!(active, vec!["EN"]);
    }

    #[test]
    fn test_restores_dark_theme_without_flipping() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "dark").unwrap();
        let mut page = CheckoutPage::new(Order::demo());
        page.set_dark_mode(true);
        let mut prefs = Preferences::new(store);

        let (_, theme) = startup(&mut page, &mut prefs, Catalog::global());

        assert_eq!(theme, ThemeMode::Dark);
        assert!(page.is_dark_mode());
        assert!(page.theme_icons().unwrap().sun_visible);
        assert_eq!(prefs.store().get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_malformed_preferences_fall_back() {
        let mut store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "xx").unwrap();
        store.set(THEME_KEY, "neon").unwrap();
        let mut page = CheckoutPage::new(Order::demo());
        let mut prefs = Preferences::new(store);

        let restored = startup(&mut page, &mut prefs, Catalog::global());

        assert_eq!(restored, (Language::Ukrainian, ThemeMode::Light));
        assert_eq!(prefs.get_language(), Some(Language::Ukrainian));
    }

    #[test]
    fn test_page_without_icons() {
        let mut page = CheckoutPage::new(Order::demo()).without_theme_toggle();
        let mut prefs = Preferences::new(MemoryStore::new());

        startup(&mut page, &mut prefs, Catalog::global());

        assert!(page.theme_icons().is_none());
        assert_eq!(page.element("to_pay").unwrap().text(), "До сплати");
    }
}
