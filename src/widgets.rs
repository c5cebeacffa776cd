use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::features::locale::{LanguageControl, ThemeIcons};
use crate::shared::theme::{ModernIcons, ModernTheme};

/// Rounded block with theme-aware border
pub fn modern_block<'a>(title: Option<&'a str>, theme: &ModernTheme, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            theme.border_focused_style()
        } else {
            theme.border_style()
        });

    if let Some(title) = title {
        block = block.title(format!(" {title} "));
    }

    block
}

/// Create a styled icon span
pub fn icon_span<'a>(icon: &'a str, style: Style) -> Span<'a> {
    Span::styled(icon, style)
}

/// Create a metric display span (amounts, order numbers)
pub fn metric_span<'a>(text: String, theme: &ModernTheme) -> Span<'a> {
    Span::styled(text, theme.metric_style())
}

/// Marker shown in front of a language button
pub fn status_icon(active: bool) -> &'static str {
    if active {
        ModernIcons::ACTIVE
    } else {
        ModernIcons::INACTIVE
    }
}

/// Spans for the language bar, the active control highlighted
pub fn language_bar<'a>(controls: &'a [LanguageControl], theme: &ModernTheme) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(controls.len() * 2);
    for control in controls {
        let style = if control.is_active() {
            theme.selected_style()
        } else {
            theme.secondary_text_style()
        };
        spans.push(Span::styled(
            format!(" {} {} ", status_icon(control.is_active()), control.label()),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    spans
}

/// The visible sun or moon icon, if the page hosts the toggle
pub fn theme_icon(icons: Option<&ThemeIcons>) -> Option<&'static str> {
    let icons = icons?;
    if icons.sun_visible {
        Some(ModernIcons::SUN)
    } else if icons.moon_visible {
        Some(ModernIcons::MOON)
    } else {
        None
    }
}

/// Button caption
pub fn button_text(label: &str) -> String {
    format!("[ {label} ]")
}

/// Truncate to `max_width` terminal columns, respecting grapheme clusters
pub fn fit_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let ellipsis = "…";
    let target_width = max_width.saturating_sub(ellipsis.width());
    let mut result = String::new();
    let mut current_width = 0;

    for grapheme in text.graphemes(true) {
        let grapheme_width = grapheme.width();
        if current_width + grapheme_width > target_width {
            break;
        }
        result.push_str(grapheme);
        current_width += grapheme_width;
    }

    result.push_str(ellipsis);
    result
}

/// Rect centered in `area`, sized as a percentage of it
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
