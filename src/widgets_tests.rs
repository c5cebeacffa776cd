//! Smoke tests for the widget helpers

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::features::locale::{LanguageControl, ThemeIcons};
    use crate::shared::{theme::*, Language};
    use crate::widgets::*;

    #[test]
    fn test_fit_width_short_text_unchanged() {
        assert_eq!(fit_width("Pay", 10), "Pay");
        assert_eq!(fit_width("Оплатити", 8), "Оплатити");
    }

    #[test]
    fn test_fit_width_truncates_by_columns() {
        let result = fit_width("Transaction History", 8);
        assert_eq!(result, "Transac…");

        let wide = fit_width("日本語テキスト", 5);
        assert_eq!(wide, "日本…");
    }

    #[test]
    fn test_status_icon_basic() {
        assert_eq!(status_icon(true), ModernIcons::ACTIVE);
        assert_eq!(status_icon(false), ModernIcons::INACTIVE);
    }

    #[test]
    fn test_theme_icon_follows_visibility() {
        let dark = ThemeIcons {
            sun_visible: true,
            moon_visible: false,
        };
        let light = ThemeIcons {
            sun_visible: false,
            moon_visible: true,
        };
        assert_eq!(theme_icon(Some(&dark)), Some(ModernIcons::SUN));
        assert_eq!(theme_icon(Some(&light)), Some(ModernIcons::MOON));
        assert_eq!(theme_icon(Some(&ThemeIcons::default())), None);
        assert_eq!(theme_icon(None), None);
    }

    #[test]
    fn test_language_bar_highlights_active() {
        let theme = ModernTheme::dark();
        let mut controls: Vec<_> = Language::ALL
            .into_iter()
            .map(LanguageControl::for_language)
            .collect();
        controls[1].set_active(true);

        let spans = language_bar(&controls, &theme);
        assert_eq!(spans.len(), 8);
        assert_eq!(spans[2].content, format!(" {} EN ", ModernIcons::ACTIVE));
        assert_eq!(spans[2].style, theme.selected_style());
        assert_eq!(spans[0].style, theme.secondary_text_style());
    }

    #[test]
    fn test_button_text() {
        assert_eq!(button_text("Pay 499.00 ₴"), "[ Pay 499.00 ₴ ]");
    }

    #[test]
    fn test_centered_rect_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 50, area);
        assert!(inner.x >= area.x && inner.right() <= area.right());
        assert!(inner.y >= area.y && inner.bottom() <= area.bottom());
        assert_eq!(inner.width, 60);
    }
}
