use crate::shared::Language;

/// What kind of control a tagged element is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementRole {
    Heading,
    Text,
    /// Label with an untranslated value shown beside it
    Label { value: Option<String> },
    Button,
    Checkbox,
    /// Input that only exposes a placeholder hint
    Input { placeholder: String },
}

/// A UI element annotated with exactly one text key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedElement {
    key: String,
    role: ElementRole,
    text: String,
    amount: Option<String>,
}

impl TaggedElement {
    pub fn new(key: impl Into<String>, role: ElementRole) -> Self {
        Self {
            key: key.into(),
            role,
            text: String::new(),
            amount: None,
        }
    }

    /// Initial markup text, shown until a language is applied
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Attach the payment amount consumed by the pay key
    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn role(&self) -> &ElementRole {
        &self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub fn amount(&self) -> Option<&str> {
        self.amount.as_deref()
    }

    pub fn is_placeholder_input(&self) -> bool {
        matches!(&self.role, ElementRole::Input { placeholder } if !placeholder.is_empty())
    }
}

/// A language selector button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageControl {
    label: String,
    code: Option<Language>,
    active: bool,
}

impl LanguageControl {
    /// Control identified by its label text only
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            code: None,
            active: false,
        }
    }

    /// Control carrying an explicit language code
    pub fn for_language(language: Language) -> Self {
        Self {
            label: language.button_label().to_string(),
            code: Some(language),
            active: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn code(&self) -> Option<Language> {
        self.code
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Explicit code wins; the label comparison only covers untagged controls
    pub fn matches(&self, language: Language) -> bool {
        match self.code {
            Some(code) => code == language,
            None => self.label.trim().to_lowercase() == language.code(),
        }
    }
}

/// Sun/moon visibility pair of the theme toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeIcons {
    pub sun_visible: bool,
    pub moon_visible: bool,
}

/// Capability the locale switcher and theme toggle need from a UI tree
pub trait UiTree {
    fn tagged_elements_mut(&mut self) -> impl Iterator<Item = &mut TaggedElement>;

    fn language_controls_mut(&mut self) -> impl Iterator<Item = &mut LanguageControl>;

    /// `None` when the page hosts no theme toggle
    fn theme_icons_mut(&mut self) -> Option<&mut ThemeIcons>;

    fn is_dark_mode(&self) -> bool;

    fn set_dark_mode(&mut self, dark: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_input_detection() {
        let input = TaggedElement::new(
            "enter_email",
            ElementRole::Input {
                placeholder: "email@example.com".into(),
            },
        );
        assert!(input.is_placeholder_input());

        let bare = TaggedElement::new(
            "enter_email",
            ElementRole::Input {
                placeholder: String::new(),
            },
        );
        assert!(!bare.is_placeholder_input());
        assert!(!TaggedElement::new("pay_btn", ElementRole::Button).is_placeholder_input());
    }

    #[test]
    fn test_control_matches_label_case_insensitively() {
        let control = LanguageControl::labelled("EN");
        assert!(control.matches(Language::English));
        assert!(!control.matches(Language::German));

        let padded = LanguageControl::labelled(" De ");
        assert!(padded.matches(Language::German));
    }

    #[test]
    fn test_control_code_overrides_label() {
        let mut control = LanguageControl::for_language(Language::Ukrainian);
        assert_eq!(control.label(), "UK");
        assert!(control.matches(Language::Ukrainian));

        control.label = "Українська".into();
        assert!(control.matches(Language::Ukrainian));
        assert!(!control.matches(Language::English));
    }
}
