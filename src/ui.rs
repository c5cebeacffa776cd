use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::{
    app::{App, StatusType},
    features::locale::{ElementRole, TaggedElement},
    shared::theme::{ModernIcons, ModernTheme},
    widgets::{
        button_text, centered_rect, fit_width, icon_span, language_bar, metric_span, modern_block,
        theme_icon,
    },
};

/// Draw the main UI
pub fn draw<S>(f: &mut Frame, app: &App<S>) {
    let theme = &app.theme;
    let area = f.size();

    f.render_widget(Block::default().style(theme.base_style()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Screen tabs
            Constraint::Min(0),    // Screen content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    draw_header(f, chunks[0], app, theme);
    draw_tabs(f, chunks[1], app, theme);
    draw_screen(f, chunks[2], app, theme);
    draw_footer(f, chunks[3], app, theme);

    if app.show_help {
        draw_help_overlay(f, area, app, theme);
    }
}

fn draw_header<S>(f: &mut Frame, area: Rect, app: &App<S>, theme: &ModernTheme) {
    let order = app.page.order();
    let title = app
        .page
        .element("title_checkout")
        .map(|element| element.text())
        .unwrap_or_default();
    let mut spans = vec![
        icon_span(ModernIcons::LOCK, theme.success_style()),
        Span::styled(format!(" {title}  "), theme.title_style()),
        metric_span(order.order_number.clone(), theme),
        Span::styled(format!("  {}  ", order.amount_display()), theme.header_style()),
    ];
    spans.extend(language_bar(app.page.language_controls(), theme));
    if let Some(icon) = theme_icon(app.page.theme_icons()) {
        spans.push(icon_span(icon, theme.warning_style()));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(modern_block(None, theme, false))
        .style(theme.surface_style());
    f.render_widget(header, area);
}

fn draw_tabs<S>(f: &mut Frame, area: Rect, app: &App<S>, theme: &ModernTheme) {
    let titles: Vec<Line> = app
        .page
        .screens()
        .iter()
        .map(|screen| Line::from(app.i18n.t(screen.kind.title_key())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(modern_block(None, theme, false))
        .select(app.page.current_index())
        .style(theme.secondary_text_style())
        .highlight_style(theme.selected_style())
        .divider(ModernIcons::BULLET);
    f.render_widget(tabs, area);
}

fn draw_screen<S>(f: &mut Frame, area: Rect, app: &App<S>, theme: &ModernTheme) {
    let screen = app.page.current_screen();
    let title = app.i18n.t(screen.kind.title_key());

    let mut lines = Vec::new();
    for element in &screen.elements {
        lines.push(element_line(element, theme));
        if matches!(element.role(), ElementRole::Heading | ElementRole::Button) {
            lines.push(Line::from(""));
        }
    }

    let body = Paragraph::new(lines)
        .block(modern_block(Some(title), theme, true))
        .wrap(Wrap { trim: false });
    f.render_widget(body, area);
}

/// Render one tagged element according to its role
fn element_line<'a>(element: &'a TaggedElement, theme: &ModernTheme) -> Line<'a> {
    let text = element.text();
    match element.role() {
        ElementRole::Heading => Line::from(Span::styled(text, theme.header_style())),
        ElementRole::Text if element.key() == "status_paid" => Line::from(vec![
            icon_span(ModernIcons::CHECK, theme.success_style()),
            Span::styled(format!(" {text}"), theme.success_style()),
        ]),
        ElementRole::Text => Line::from(Span::styled(text, theme.secondary_text_style())),
        ElementRole::Label { value } => {
            let mut spans = vec![Span::styled(text, theme.secondary_text_style())];
            if let Some(value) = value {
                spans.push(Span::raw(": "));
                spans.push(metric_span(value.clone(), theme));
            }
            Line::from(spans)
        }
        ElementRole::Button => Line::from(vec![
            icon_span(ModernIcons::ARROW_RIGHT, theme.border_focused_style()),
            Span::raw(" "),
            Span::styled(button_text(text), theme.selected_style()),
        ]),
        ElementRole::Checkbox => Line::from(vec![
            icon_span(ModernIcons::CHECKBOX_OFF, theme.secondary_text_style()),
            Span::styled(format!(" {text}"), theme.secondary_text_style()),
        ]),
        ElementRole::Input { placeholder } => Line::from(vec![
            Span::styled(format!("{text} "), theme.secondary_text_style()),
            icon_span(ModernIcons::CARD, theme.border_style()),
            Span::styled(format!(" {placeholder} "), theme.dimmed_style()),
        ]),
    }
}

fn draw_footer<S>(f: &mut Frame, area: Rect, app: &App<S>, theme: &ModernTheme) {
    let t = |key: &'static str| app.i18n.t(key);
    let mut spans = vec![
        Span::styled(format!("{} ", t("controls.language")), theme.secondary_text_style()),
        Span::styled("1-4 l", theme.header_style()),
        Span::styled(format!("  {} ", t("controls.theme")), theme.secondary_text_style()),
        Span::styled("t", theme.header_style()),
        Span::styled(format!("  {} ", t("controls.screens")), theme.secondary_text_style()),
        Span::styled("Tab", theme.header_style()),
        Span::styled(format!("  {} ", t("controls.help")), theme.secondary_text_style()),
        Span::styled("?", theme.header_style()),
        Span::styled(format!("  q {}", t("controls.quit")), theme.secondary_text_style()),
    ];

    if let Some(message) = &app.status_message {
        let style = match message.message_type {
            StatusType::Info => theme.secondary_text_style(),
            StatusType::Success => theme.success_style(),
            StatusType::Warning => theme.danger_style(),
        };
        let room = usize::from(area.width).saturating_sub(4) / 3;
        spans.push(Span::raw("   "));
        spans.push(Span::styled(fit_width(&message.text, room), style));
    }

    let footer = Paragraph::new(Line::from(spans)).block(modern_block(None, theme, false));
    f.render_widget(footer, area);
}

fn draw_help_overlay<S>(f: &mut Frame, area: Rect, app: &App<S>, theme: &ModernTheme) {
    let popup = centered_rect(60, 50, area);
    let t = |key: &'static str| app.i18n.t(key);
    let key_style = theme.header_style();
    let text_style = theme.secondary_text_style();

    let entry = |keys: &'static str, label: String| -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{keys:>12}  "), key_style),
            Span::styled(label, text_style),
        ])
    };

    let languages = app
        .page
        .language_controls()
        .iter()
        .map(|control| control.label())
        .collect::<Vec<_>>()
        .join(" / ");

    let lines = vec![
        entry("1 2 3 4", format!("{} {languages}", t("controls.language"))),
        entry("l", t("controls.language").to_string()),
        entry("t", t("controls.theme").to_string()),
        entry("Tab S-Tab", t("controls.screens").to_string()),
        entry("?", t("controls.help").to_string()),
        entry("q Esc", t("controls.quit").to_string()),
    ];

    f.render_widget(Clear, popup);
    let help = Paragraph::new(lines)
        .block(modern_block(Some(t("help.title")), theme, true))
        .style(Style::default().bg(theme.surface));
    f.render_widget(help, popup);
}
