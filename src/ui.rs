// src/ui.rs
use ratatui::{prelude::*, widgets::*};

use crate::config::{Config, Theme};
use crate::editor::viewport::ViewportLine;
use crate::editor::EditorSession;
use crate::filesystem::{DirectoryBrowser, EntryKind};
use crate::tabs::TabController;

/// Draws the tab bar, the active session and its status line. The viewport
/// height of the active session follows the space left for the body.
pub fn draw(frame: &mut Frame, tabs: &mut TabController, config: &Config) {
    let theme = &config.theme;
    let has_message = tabs.active().message().is_some();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(u16::from(has_message)),
            Constraint::Length(1),
        ])
        .split(frame.size());

    render_tabs(frame, chunks[0], tabs, theme);

    let session = tabs.active_mut();
    session.set_lines_displayed(config.viewport_height(chunks[1].height as usize));
    let session = tabs.active();

    if session.browser().is_visible() {
        render_browser(frame, chunks[1], session.browser(), session.message(), theme);
    } else {
        render_editor(frame, chunks[1], session, theme);
    }

    if let Some(message) = session.message() {
        frame.render_widget(Paragraph::new(message).style(theme.error), chunks[2]);
    }

    let status = session.status_line(chunks[3].width as usize);
    frame.render_widget(Paragraph::new(status).style(theme.footer), chunks[3]);
}

fn render_tabs(frame: &mut Frame, area: Rect, tabs: &TabController, theme: &Theme) {
    let titles: Vec<String> = (0..tabs.tabs().len()).map(|i| tabs.label(i)).collect();
    let session = tabs.active();
    let mut title = format!(" {} ", session.state().label());
    if !session.pending().is_empty() {
        title.push_str(session.pending().as_str());
        title.push(' ');
    }
    let widget = Tabs::new(titles)
        .select(tabs.active_index())
        .style(theme.inactive_tab)
        .highlight_style(theme.active_tab)
        .block(Block::default().borders(Borders::ALL).border_style(theme.border).title(title));
    frame.render_widget(widget, area);
}

fn render_editor(frame: &mut Frame, area: Rect, session: &EditorSession, theme: &Theme) {
    let lines: Vec<Line> = session.viewport().iter().map(|line| editor_line(line, theme)).collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn editor_line<'a>(view: &ViewportLine<'a>, theme: &Theme) -> Line<'a> {
    let gutter = Span::styled(view.label.clone(), theme.gutter);
    let text = view.line.text();
    if !view.line.is_focused() {
        return Line::from(vec![gutter, Span::styled(text, theme.blurred_line)]);
    }

    let caret = view.line.caret();
    let split = text.char_indices().nth(caret).map(|(i, _)| i).unwrap_or(text.len());
    let (before, rest) = text.split_at(split);
    let mut chars = rest.chars();
    let under = chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
    let after = chars.as_str();

    Line::from(vec![
        gutter,
        Span::styled(before, theme.focused_line),
        Span::styled(under, theme.caret),
        Span::styled(after, theme.focused_line),
    ])
}

fn render_browser(
    frame: &mut Frame,
    area: Rect,
    browser: &DirectoryBrowser,
    message: Option<&str>,
    theme: &Theme,
) {
    let mut lines = browser_header(browser, message, theme);

    let list_height = (area.height as usize).saturating_sub(lines.len());
    let entries: Vec<_> = browser.filtered_entries().collect();
    let start = scroll_start(browser.selection_index(), list_height);

    for (i, entry) in entries.iter().enumerate().skip(start).take(list_height) {
        let suffix = if entry.kind == EntryKind::Directory { "/" } else { "" };
        let text = format!("{}. {}{}", i + 1, entry.name, suffix);
        if i == browser.selection_index() {
            lines.push(Line::styled(format!("> {}", text), theme.browser_selected));
        } else {
            lines.push(Line::styled(format!("  {}", text), theme.browser_item));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Directory, entry count and search text, plus the last error if any.
fn browser_header<'a>(browser: &DirectoryBrowser, message: Option<&'a str>, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::styled(format!("Current directory: {}", browser.display_dir()), theme.browser_header),
        Line::styled(
            format!("Number of files in this directory: {}", browser.entry_count()),
            theme.browser_header,
        ),
        Line::styled(format!("Search: {}", browser.search_text()), theme.browser_header),
    ];
    if let Some(message) = message {
        lines.push(Line::styled(message, theme.error));
    }
    lines
}

/// First list row to draw so that `selected` stays inside `height` rows.
pub fn scroll_start(selected: usize, height: usize) -> usize {
    if height == 0 {
        return selected;
    }
    (selected + 1).saturating_sub(height)
}
