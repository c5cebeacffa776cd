use crate::shared::i18n::{CURRENCY_SUFFIX, PAY_KEY};
use crate::shared::{Catalog, KeyValueStore, Language, Preferences};

use super::tree::{TaggedElement, UiTree};

/// Writes catalog strings into a UI tree and remembers the choice
pub struct LocaleSwitcher<'a> {
    catalog: &'a Catalog,
}

impl<'a> LocaleSwitcher<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Apply `language` to every tagged element, mark the matching language
    /// control active and persist the language.
    ///
    /// Elements whose key the language lacks keep their current text.
    /// Placeholder-only inputs are skipped: placeholder translation is not
    /// supported yet. Returns the number of elements whose text was written.
    pub fn apply_language<T, S>(
        &self,
        tree: &mut T,
        preferences: &mut Preferences<S>,
        language: Language,
    ) -> usize
    where
        T: UiTree,
        S: KeyValueStore,
    {
        let mut updated = 0;
        for element in tree.tagged_elements_mut() {
            if self.translate_element(element, language) {
                updated += 1;
            }
        }

        mark_active_control(tree, language);

        if let Err(e) = preferences.set_language(language) {
            tracing::warn!(%language, error = %e, "failed to persist language");
        }

        tracing::info!(%language, updated, "applied language");
        updated
    }

    fn translate_element(&self, element: &mut TaggedElement, language: Language) -> bool {
        let Some(label) = self.catalog.lookup(language, element.key()) else {
            tracing::debug!(%language, key = element.key(), "no translation, keeping text");
            return false;
        };

        if element.is_placeholder_input() {
            tracing::debug!(key = element.key(), "placeholder translation not supported");
            return false;
        }

        let text = match (element.key(), element.amount()) {
            (PAY_KEY, Some(amount)) => format!("{label} {amount} {CURRENCY_SUFFIX}"),
            _ => label.to_string(),
        };
        element.set_text(text);
        true
    }
}

/// Mark the last control matching `language` active and clear the rest
fn mark_active_control<T: UiTree>(tree: &mut T, language: Language) {
    let mut controls: Vec<_> = tree.language_controls_mut().collect();
    let winner = controls.iter().rposition(|control| control.matches(language));

    for (index, control) in controls.iter_mut().enumerate() {
        control.set_active(Some(index) == winner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::locale::tree::{ElementRole, LanguageControl, ThemeIcons};
    use crate::shared::config::{MemoryStore, LANGUAGE_KEY};

    #[derive(Default)]
    struct TestTree {
        elements: Vec<TaggedElement>,
        controls: Vec<LanguageControl>,
        dark: bool,
    }

    impl UiTree for TestTree {
        fn tagged_elements_mut(&mut self) -> impl Iterator<Item = &mut TaggedElement> {
            self.elements.iter_mut()
        }

        fn language_controls_mut(&mut self) -> impl Iterator<Item = &mut LanguageControl> {
            self.controls.iter_mut()
        }

        fn theme_icons_mut(&mut self) -> Option<&mut ThemeIcons> {
            None
        }

        fn is_dark_mode(&self) -> bool {
            self.dark
        }

        fn set_dark_mode(&mut self, dark: bool) {
            self.dark = dark;
        }
    }

    fn tree_with(elements: Vec<TaggedElement>) -> TestTree {
        TestTree {
            elements,
            controls: ["UK", "EN", "DE", "RU"]
                .into_iter()
                .map(LanguageControl::labelled)
                .collect(),
            dark: false,
        }
    }

    fn texts(tree: &TestTree) -> Vec<String> {
        tree.elements.iter().map(|e| e.text().to_string()).collect()
    }

    fn active_labels(tree: &TestTree) -> Vec<&str> {
        tree.controls
            .iter()
            .filter(|c| c.is_active())
            .map(|c| c.label())
            .collect()
    }

    #[test]
    fn test_every_key_gets_catalog_string() {
        let catalog = Catalog::global();
        for language in Language::ALL {
            let elements = catalog
                .keys(language)
                .into_iter()
                .filter(|key| *key != PAY_KEY)
                .map(|key| TaggedElement::new(key, ElementRole::Text).with_text("stale"))
                .collect();
            let mut tree = tree_with(elements);
            let mut prefs = Preferences::new(MemoryStore::new());

            LocaleSwitcher::new(catalog).apply_language(&mut tree, &mut prefs, language);

            for element in &tree.elements {
                assert_eq!(
                    Some(element.text()),
                    catalog.lookup(language, element.key()),
                    "{language}/{}",
                    element.key()
                );
            }
        }
    }

    #[test]
    fn test_german_success_title() {
        let mut tree = tree_with(vec![TaggedElement::new("success_title", ElementRole::Heading)]);
        let mut prefs = Preferences::new(MemoryStore::new());

        LocaleSwitcher::new(Catalog::global()).apply_language(
            &mut tree,
            &mut prefs,
            Language::German,
        );

        assert_eq!(tree.elements[0].text(), "Zahlung erfolgreich!");
    }

    #[test]
    fn test_pay_button_with_and_without_amount() {
        let mut tree = tree_with(vec![
            TaggedElement::new(PAY_KEY, ElementRole::Button).with_amount("499.00"),
            TaggedElement::new(PAY_KEY, ElementRole::Button),
        ]);
        let mut prefs = Preferences::new(MemoryStore::new());
        let switcher = LocaleSwitcher::new(Catalog::global());

        switcher.apply_language(&mut tree, &mut prefs, Language::English);
        assert_eq!(texts(&tree), vec!["Pay 499.00 ₴", "Pay"]);

        switcher.apply_language(&mut tree, &mut prefs, Language::Ukrainian);
        assert_eq!(texts(&tree), vec!["Оплатити 499.00 ₴", "Оплатити"]);
    }

    #[test]
    fn test_amount_only_affects_pay_key() {
        let mut tree = tree_with(vec![
            TaggedElement::new("to_pay", ElementRole::Text).with_amount("10.00")
        ]);
        let mut prefs = Preferences::new(MemoryStore::new());

        LocaleSwitcher::new(Catalog::global()).apply_language(
            &mut tree,
            &mut prefs,
            Language::English,
        );

        assert_eq!(tree.elements[0].text(), "Total Amount");
    }

    #[test]
    fn test_missing_key_keeps_previous_text() {
        let mut tree = tree_with(vec![
            TaggedElement::new("promo_banner", ElementRole::Text).with_text("Знижка 10%"),
            TaggedElement::new("to_pay", ElementRole::Text),
        ]);
        let mut prefs = Preferences::new(MemoryStore::new());

        let updated = LocaleSwitcher::new(Catalog::global()).apply_language(
            &mut tree,
            &mut prefs,
            Language::English,
        );

        assert_eq!(updated, 1);
        assert_eq!(texts(&tree), vec!["Знижка 10%", "Total Amount"]);
    }

    #[test]
    fn test_partial_language_keeps_previous_text() {
        let catalog = Catalog::from_tables(&[
            (Language::English, &[("title_checkout", "Checkout"), ("to_pay", "Total")]),
            (Language::German, &[("title_checkout", "Kasse")]),
        ]);
        let mut tree = tree_with(vec![
            TaggedElement::new("title_checkout", ElementRole::Heading),
            TaggedElement::new("to_pay", ElementRole::Text),
        ]);
        let mut prefs = Preferences::new(MemoryStore::new());
        let switcher = LocaleSwitcher::new(&catalog);

        switcher.apply_language(&mut tree, &mut prefs, Language::English);
        switcher.apply_language(&mut tree, &mut prefs, Language::German);

        assert_eq!(texts(&tree), vec!["Kasse", "Total"]);
    }

    #[test]
    fn test_placeholder_input_is_left_alone() {
        let mut tree = tree_with(vec![TaggedElement::new(
            "enter_email",
            ElementRole::Input {
                placeholder: "email@example.com".into(),
            },
        )
        .with_text("markup")]);
        let mut prefs = Preferences::new(MemoryStore::new());

        let updated = LocaleSwitcher::new(Catalog::global()).apply_language(
            &mut tree,
            &mut prefs,
            Language::German,
        );

        assert_eq!(updated, 0);
        assert_eq!(tree.elements[0].text(), "markup");
    }

    #[test]
    fn test_apply_is_idempotent() {
        let build = || {
            tree_with(vec![
                TaggedElement::new("title_checkout", ElementRole::Heading),
                TaggedElement::new(PAY_KEY, ElementRole::Button).with_amount("12.50"),
                TaggedElement::new("unknown", ElementRole::Text).with_text("keep"),
            ])
        };
        let switcher = LocaleSwitcher::new(Catalog::global());

        let mut once = build();
        let mut prefs = Preferences::new(MemoryStore::new());
        switcher.apply_language(&mut once, &mut prefs, Language::Russian);

        let mut twice = build();
        switcher.apply_language(&mut twice, &mut prefs, Language::Russian);
        switcher.apply_language(&mut twice, &mut prefs, Language::Russian);

        assert_eq!(once.elements, twice.elements);
        assert_eq!(once.controls, twice.controls);
    }

    #[test]
    fn test_exactly_one_control_active() {
        let mut tree = tree_with(Vec::new());
        tree.controls[2].set_active(true);
        let mut prefs = Preferences::new(MemoryStore::new());
        let switcher = LocaleSwitcher::new(Catalog::global());

        for language in Language::ALL {
            switcher.apply_language(&mut tree, &mut prefs, language);
            assert_eq!(active_labels(&tree), vec![language.button_label()]);
        }
    }

    #[test]
    fn test_duplicate_matches_mark_only_the_last() {
        let mut tree = tree_with(Vec::new());
        tree.controls.push(LanguageControl::labelled("en"));
        let mut prefs = Preferences::new(MemoryStore::new());

        LocaleSwitcher::new(Catalog::global()).apply_language(
            &mut tree,
            &mut prefs,
            Language::English,
        );

        assert_eq!(active_labels(&tree), vec!["en"]);
    }

    #[test]
    fn test_no_matching_control_clears_all() {
        let mut tree = tree_with(Vec::new());
        tree.controls = vec![LanguageControl::labelled("FR"), LanguageControl::labelled("EN")];
        tree.controls[1].set_active(true);
        let mut prefs = Preferences::new(MemoryStore::new());

        LocaleSwitcher::new(Catalog::global()).apply_language(
            &mut tree,
            &mut prefs,
            Language::German,
        );

        assert!(active_labels(&tree).is_empty());
    }

    #[test]
    fn test_language_is_persisted() {
        let mut tree = tree_with(Vec::new());
        let mut prefs = Preferences::new(MemoryStore::new());

        LocaleSwitcher::new(Catalog::global()).apply_language(
            &mut tree,
            &mut prefs,
            Language::Russian,
        );

        assert_eq!(prefs.get_language(), Some(Language::Russian));
        assert_eq!(prefs.store().get(LANGUAGE_KEY).as_deref(), Some("ru"));
    }
}
