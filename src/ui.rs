use chrono::{Local, NaiveDate};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Clear, Widget},
    Frame,
};

use crate::{
    app::{App, InputMode, StatusType},
    shared::theme::{ModernIcons, ModernTheme},
    widgets::{
        icon_span, metric_span, status_icon, truncate_text, ButtonVariant, ModernButton,
        ModernCard, ModernList, ModernListItem, ModernProgressBar, ProgressVariant,
    },
};

/// Format the header date as "Month Day" in the fixed English locale
fn format_header_date(date: NaiveDate) -> String {
    date.format("%B %-d").to_string()
}

/// The header shows the todo count as a literal decimal
fn format_todo_count(count: usize) -> String {
    count.to_string()
}

/// Draw the main UI
pub fn draw(f: &mut Frame, app: &App) {
    let theme = app.current_theme().clone();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(4), // Footer
        ])
        .split(f.size());

    draw_modern_header(f, chunks[0], app, &theme);
    draw_modern_main_content(f, chunks[1], app, &theme);
    draw_modern_footer(f, chunks[2], app, &theme);

    // Draw input overlay while a new todo is being typed
    if app.input_mode == InputMode::Editing {
        draw_input_overlay(f, f.size(), app, &theme);
    }

    // Draw help overlay if enabled
    if app.config.show_help {
        draw_help_overlay(f, f.size(), app, &theme);
    }
}

/// Draw the header: title, date, todo count and the two action buttons
fn draw_modern_header(f: &mut Frame, area: Rect, app: &App, theme: &ModernTheme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Title, date, count, status
            Constraint::Length(17), // Export button
            Constraint::Length(17), // Paste button
        ])
        .split(area);

    let mut header_spans = vec![
        icon_span(ModernIcons::LOGO, Style::default().fg(theme.accent)),
        Span::styled(
            format!(" {}", app.i18n.t("app.title")),
            theme.header_style(),
        ),
        Span::styled(" │ ", theme.border_style()),
        icon_span(ModernIcons::TIME, Style::default().fg(theme.info)),
        Span::styled(
            format!(" {}", format_header_date(Local::now().date_naive())),
            theme.secondary_text_style(),
        ),
        Span::styled(" │ ", theme.border_style()),
        icon_span(ModernIcons::BULLET, Style::default().fg(theme.success)),
        Span::styled(" ", Style::default()),
        metric_span(format_todo_count(app.todos.len()), theme),
        Span::styled(
            format!(" {}", app.i18n.t("header.todos")),
            theme.secondary_text_style(),
        ),
    ];

    // Add status message to header if present
    if let Some(ref status) = app.status_message {
        let style = match status.message_type {
            StatusType::Info => theme.info_style(),
            StatusType::Success => theme.success_style(),
            StatusType::Warning => theme.warning_style(),
            StatusType::Error => theme.danger_style(),
        };

        let icon = match status.message_type {
            StatusType::Info => "ℹ",
            StatusType::Success => "✓",
            StatusType::Warning => "⚠",
            StatusType::Error => "✗",
        };

        header_spans.push(Span::styled(" │ ", theme.border_style()));
        header_spans.push(Span::styled(format!(" {} {}", icon, status.text), style));
    }

    let header_card = ModernCard::new(Text::from(vec![Line::from(header_spans)]), theme);
    header_card.render(chunks[0], f.buffer_mut());

    // The two action buttons; activation is wired to their hotkeys
    let export_label = format!(
        "{} {} [e]",
        ModernIcons::EXPORT,
        app.i18n.t("button.export")
    );
    ModernButton::new(&export_label, theme)
        .variant(ButtonVariant::Primary)
        .render(chunks[1], f.buffer_mut());

    let paste_label = format!("🔗 {} [p]", app.i18n.t("button.paste"));
    ModernButton::new(&paste_label, theme)
        .variant(ButtonVariant::Secondary)
        .render(chunks[2], f.buffer_mut());
}

/// Draw the main content area: progress summary above the todo list
fn draw_modern_main_content(f: &mut Frame, area: Rect, app: &App, theme: &ModernTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Progress section
            Constraint::Min(0),    // Todo list
        ])
        .split(area);

    draw_progress_card(f, chunks[0], app, theme);
    draw_todo_list(f, chunks[1], app, theme);
}

fn draw_progress_card(f: &mut Frame, area: Rect, app: &App, theme: &ModernTheme) {
    let stats = app.todos.stats();

    if stats.total == 0 {
        let empty_content = Text::from(vec![
            Line::from(Span::styled(
                app.i18n.t("list.empty"),
                theme.secondary_text_style(),
            )),
            Line::from(Span::styled(
                app.i18n.t("list.empty_hint"),
                theme.dimmed_style(),
            )),
        ]);
        ModernCard::new(empty_content, theme)
            .title(app.i18n.t("progress.title"))
            .render(area, f.buffer_mut());
        return;
    }

    let progress_content = Text::from(vec![Line::from(vec![
        icon_span(ModernIcons::COMPLETED, Style::default().fg(theme.success)),
        Span::styled(
            format!(
                " {}/{} {}",
                stats.done,
                stats.total,
                app.i18n.t("progress.completed")
            ),
            theme.secondary_text_style(),
        ),
        Span::styled(" • ", theme.secondary_text_style()),
        Span::styled(
            format!("{} {}", stats.open, app.i18n.t("progress.open")),
            if stats.open > 0 {
                theme.warning_style()
            } else {
                theme.secondary_text_style()
            },
        ),
    ])]);

    ModernCard::new(progress_content, theme)
        .title(app.i18n.t("progress.title"))
        .render(area, f.buffer_mut());

    // Render progress bar on the card's bottom line
    if area.height >= 3 && area.width > 4 {
        let progress_area = Rect {
            x: area.x + 2,
            y: area.y + area.height - 2,
            width: area.width - 4,
            height: 1,
        };

        ModernProgressBar::new(stats.completion_percentage, theme)
            .variant(ProgressVariant::Auto)
            .render(progress_area, f.buffer_mut());
    }
}

fn draw_todo_list(f: &mut Frame, area: Rect, app: &App, theme: &ModernTheme) {
    // Borders, icon and padding eat a fixed share of each row
    let max_text_width = (area.width as usize).saturating_sub(6);

    let items: Vec<ModernListItem> = app
        .todos
        .items()
        .iter()
        .map(|todo| {
            let text = truncate_text(&todo.text, max_text_width);
            let mut item = ModernListItem::new(Line::from(text)).icon(status_icon(todo.is_done()));
            if todo.is_done() {
                item = item.style(theme.done_text_style());
            }
            item
        })
        .collect();

    let stats = app.todos.stats();
    let list_title = format!("{} ({} open)", app.i18n.t("list.title"), stats.open);

    let selected = if app.todos.is_empty() {
        None
    } else {
        Some(app.selected)
    };

    ModernList::new(items, theme)
        .selected(selected)
        .title(&list_title)
        .render(area, f.buffer_mut());
}

/// Draw the footer with key hints and the active theme
fn draw_modern_footer(f: &mut Frame, area: Rect, app: &App, theme: &ModernTheme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Key hints
            Constraint::Length(22), // Theme info
        ])
        .split(area);

    let accent_key = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);

    let help_content = Text::from(vec![
        Line::from(vec![
            Span::styled(
                app.i18n.t("controls.navigation"),
                theme.secondary_text_style(),
            ),
            Span::styled(" j/k ↑↓", accent_key),
            Span::styled(" | ", theme.secondary_text_style()),
            Span::styled("a", accent_key),
            Span::styled(
                format!(" {} | ", app.i18n.t("controls.add")),
                theme.secondary_text_style(),
            ),
            Span::styled("Space", accent_key),
            Span::styled(
                format!(" {} | ", app.i18n.t("controls.toggle")),
                theme.secondary_text_style(),
            ),
            Span::styled("d", accent_key),
            Span::styled(
                format!(" {}", app.i18n.t("controls.delete")),
                theme.secondary_text_style(),
            ),
        ]),
        Line::from(vec![
            Span::styled("e", accent_key),
            Span::styled(
                format!(" {} | ", app.i18n.t("controls.export")),
                theme.secondary_text_style(),
            ),
            Span::styled("p", accent_key),
            Span::styled(
                format!(" {} | ", app.i18n.t("controls.paste")),
                theme.secondary_text_style(),
            ),
            Span::styled(app.i18n.t("controls.help"), theme.secondary_text_style()),
            Span::styled(" ?", accent_key),
            Span::styled(" | ", theme.secondary_text_style()),
            Span::styled("q", theme.danger_style().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" {}", app.i18n.t("controls.quit")),
                theme.secondary_text_style(),
            ),
        ]),
    ]);

    ModernCard::new(help_content, theme)
        .title("Controls")
        .render(chunks[0], f.buffer_mut());

    let theme_content = Text::from(vec![
        Line::from(vec![Span::styled(
            app.config.theme_display(),
            theme.info_style(),
        )]),
        Line::from(vec![Span::styled(
            app.i18n.t("theme.cycle_hint"),
            theme.dimmed_style(),
        )]),
    ]);

    ModernCard::new(theme_content, theme)
        .title(app.i18n.t("theme.title"))
        .render(chunks[1], f.buffer_mut());
}

/// Draw the centered overlay for typing a new todo
fn draw_input_overlay(f: &mut Frame, area: Rect, app: &App, theme: &ModernTheme) {
    let popup_width = 60.min(area.width.saturating_sub(4));
    let popup_height = 5.min(area.height.saturating_sub(2));

    let popup_area = Rect {
        x: area.width.saturating_sub(popup_width) / 2,
        y: area.height.saturating_sub(popup_height) / 2,
        width: popup_width,
        height: popup_height,
    };

    // Clear the area first
    f.render_widget(Clear, popup_area);

    let content = Text::from(vec![
        Line::from(Span::styled(
            app.input.buffer.as_str(),
            theme.header_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", theme.success_style()),
            Span::styled(
                format!(" {}, ", app.i18n.t("input.confirm")),
                theme.secondary_text_style(),
            ),
            Span::styled("Esc", theme.danger_style()),
            Span::styled(
                format!(" {}", app.i18n.t("input.cancel")),
                theme.secondary_text_style(),
            ),
        ]),
    ]);

    let title = format!("✎ {}", app.i18n.t("input.title"));
    ModernCard::new(content, theme)
        .title(&title)
        .focused(true)
        .render(popup_area, f.buffer_mut());

    // Place the terminal cursor inside the input line
    let cursor_x = popup_area.x + 1 + app.input.width_before_cursor() as u16;
    let cursor_y = popup_area.y + 1;
    if cursor_x < popup_area.x + popup_area.width.saturating_sub(1) {
        f.set_cursor(cursor_x, cursor_y);
    }
}

/// Draw help overlay with explanations
fn draw_help_overlay(f: &mut Frame, area: Rect, app: &App, theme: &ModernTheme) {
    // Create centered popup area
    let popup_area = Rect {
        x: area.width / 6,
        y: area.height / 6,
        width: area.width * 2 / 3,
        height: area.height * 2 / 3,
    };

    // Clear the background
    f.render_widget(Clear, popup_area);

    let help_content = Text::from(vec![
        Line::from(Span::styled(
            app.i18n.t("help.keys.title"),
            theme.header_style(),
        )),
        Line::from(Span::styled(
            app.i18n.t("help.keys.line1"),
            theme.secondary_text_style(),
        )),
        Line::from(Span::styled(
            app.i18n.t("help.keys.line2"),
            theme.secondary_text_style(),
        )),
        Line::from(Span::styled(
            app.i18n.t("help.keys.line3"),
            theme.secondary_text_style(),
        )),
        Line::from(Span::styled(
            app.i18n.t("help.keys.line4"),
            theme.secondary_text_style(),
        )),
        Line::from(Span::styled(
            app.i18n.t("help.keys.line5"),
            theme.secondary_text_style(),
        )),
        Line::from(Span::styled(
            app.i18n.t("help.keys.line6"),
            theme.secondary_text_style(),
        )),
        Line::from(Span::styled(
            app.i18n.t("help.keys.line7"),
            theme.secondary_text_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            app.i18n.t("help.export.title"),
            theme.header_style(),
        )),
        Line::from(Span::styled(
            app.i18n.t("help.export.line1"),
            theme.secondary_text_style(),
        )),
        Line::from(Span::styled(
            app.i18n.t("help.export.line2"),
            theme.secondary_text_style(),
        )),
        Line::from(Span::styled(
            app.i18n.t("help.export.line3"),
            theme.secondary_text_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            app.i18n.t("help.paste.title"),
            theme.header_style(),
        )),
        Line::from(Span::styled(
            app.i18n.t("help.paste.line1"),
            theme.secondary_text_style(),
        )),
        Line::from(Span::styled(
            app.i18n.t("help.paste.line2"),
            theme.secondary_text_style(),
        )),
        Line::from(Span::styled(
            app.i18n.t("help.paste.line3"),
            theme.secondary_text_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", theme.secondary_text_style()),
            Span::styled("?", theme.info_style().add_modifier(Modifier::BOLD)),
            Span::styled(" or ", theme.secondary_text_style()),
            Span::styled("Esc", theme.danger_style().add_modifier(Modifier::BOLD)),
            Span::styled(" to close", theme.secondary_text_style()),
        ]),
    ]);

    let title = format!("{} Help", ModernIcons::HELP);
    ModernCard::new(help_content, theme)
        .title(&title)
        .focused(true)
        .render(popup_area, f.buffer_mut());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_date_format() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(format_header_date(date), "August 6");
    }

    #[test]
    fn test_header_date_has_no_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
        assert_eq!(format_header_date(date), "March 3");
    }

    #[test]
    fn test_header_date_two_digit_day() {
        let date = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
        assert_eq!(format_header_date(date), "December 25");
    }

    #[test]
    fn test_todo_count_is_displayed_literally() {
        assert_eq!(format_todo_count(0), "0");
        assert_eq!(format_todo_count(1), "1");
        assert_eq!(format_todo_count(42), "42");
        assert_eq!(format_todo_count(1000), "1000");
    }
}
