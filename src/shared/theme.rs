use ratatui::style::{Color, Modifier, Style};

use super::config::ThemeMode;

/// Color palette for the checkout screens
#[derive(Debug, Clone)]
pub struct ModernTheme {
    // Primary colors
    pub primary: Color,
    pub accent: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,

    // Background and surface colors
    pub background: Color,
    pub surface: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,

    // Interactive colors
    pub selected: Color,
    pub border: Color,
    pub border_focused: Color,
}

impl Default for ModernTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl ModernTheme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Dark variant used when `dark-mode` is on
    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(99, 102, 241), // Indigo-500
            accent: Color::Rgb(168, 85, 247),  // Purple-500

            success: Color::Rgb(34, 197, 94),  // Green-500
            warning: Color::Rgb(251, 191, 36), // Amber-500
            danger: Color::Rgb(239, 68, 68),   // Red-500

            background: Color::Rgb(17, 24, 39), // Gray-900
            surface: Color::Rgb(31, 41, 55),    // Gray-800

            text_primary: Color::Rgb(243, 244, 246), // Gray-100
            text_secondary: Color::Rgb(156, 163, 175), // Gray-400
            text_disabled: Color::Rgb(107, 114, 128), // Gray-500

            selected: Color::Rgb(99, 102, 241),
            border: Color::Rgb(75, 85, 99), // Gray-600
            border_focused: Color::Rgb(99, 102, 241),
        }
    }

    /// Light variant, the default look
    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(79, 70, 229), // Indigo-600
            accent: Color::Rgb(147, 51, 234), // Purple-600

            success: Color::Rgb(22, 163, 74),  // Green-600
            warning: Color::Rgb(217, 119, 6),  // Amber-600
            danger: Color::Rgb(220, 38, 38),   // Red-600

            background: Color::Rgb(255, 255, 255),
            surface: Color::Rgb(249, 250, 251),

            text_primary: Color::Rgb(17, 24, 39),
            text_secondary: Color::Rgb(107, 114, 128),
            text_disabled: Color::Rgb(156, 163, 175),

            selected: Color::Rgb(79, 70, 229),
            border: Color::Rgb(209, 213, 219),
            border_focused: Color::Rgb(79, 70, 229),
        }
    }
}

/// Unicode symbols used across the screens
pub struct ModernIcons;

impl ModernIcons {
    // Theme toggle
    pub const SUN: &'static str = "☀";
    pub const MOON: &'static str = "☾";

    // Language bar
    pub const ACTIVE: &'static str = "●";
    pub const INACTIVE: &'static str = "○";

    // Screen content
    pub const CHECK: &'static str = "✓";
    pub const CARD: &'static str = "▭";
    pub const LOCK: &'static str = "⚿";
    pub const ARROW_RIGHT: &'static str = "▶";
    pub const BULLET: &'static str = "•";
    pub const CHECKBOX_OFF: &'static str = "☐";
}

/// Pre-defined styles for common UI elements
impl ModernTheme {
    /// Base style painted under every screen
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.background)
    }

    /// Style for headers and titles
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the page title in the header
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn secondary_text_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn success_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning_style(&self) -> Style {
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD)
    }

    pub fn danger_style(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the active language button and primary buttons
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(Color::Rgb(255, 255, 255))
            .bg(self.selected)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused_style(&self) -> Style {
        Style::default()
            .fg(self.border_focused)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for amounts and other figures
    pub fn metric_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for placeholders and hints
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.text_disabled)
    }

    pub fn surface_style(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_light() {
        let theme = ModernTheme::default();
        assert_eq!(theme.background, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_theme_for_mode() {
        assert_eq!(
            ModernTheme::for_mode(ThemeMode::Dark).background,
            ModernTheme::dark().background
        );
        assert_eq!(
            ModernTheme::for_mode(ThemeMode::Light).background,
            ModernTheme::light().background
        );
    }

    #[test]
    fn test_text_contrasts_with_background() {
        for theme in [ModernTheme::dark(), ModernTheme::light()] {
            assert_ne!(theme.text_primary, theme.background);
            assert_ne!(theme.text_secondary, theme.background);
            assert_ne!(theme.primary, theme.accent);
        }
    }

    #[test]
    fn test_selected_style_is_bold() {
        let theme = ModernTheme::dark();
        let style = theme.selected_style();
        assert_eq!(style.bg, Some(theme.selected));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_title_uses_primary_color() {
        for theme in [ModernTheme::dark(), ModernTheme::light()] {
            let style = theme.title_style();
            assert_eq!(style.fg, Some(theme.primary));
            assert!(style.add_modifier.contains(Modifier::BOLD));
        }
    }

    #[test]
    fn test_theme_icons_differ() {
        assert_ne!(ModernIcons::SUN, ModernIcons::MOON);
        assert_ne!(ModernIcons::ACTIVE, ModernIcons::INACTIVE);
    }
}
