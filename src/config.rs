// src/config.rs
use ratatui::style::{Color, Modifier, Style};

use crate::editor::viewport::DEFAULT_LINES_DISPLAYED;

/// Rows moved by Ctrl+D / Ctrl+U.
pub const HALF_PAGE: usize = 15;

/// Styles used by the renderers. Built once and handed to the UI instead of
/// living in globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub focused_line: Style,
    pub blurred_line: Style,
    pub caret: Style,
    pub gutter: Style,
    pub footer: Style,
    pub browser_item: Style,
    pub browser_selected: Style,
    pub browser_header: Style,
    pub active_tab: Style,
    pub inactive_tab: Style,
    pub border: Style,
    pub error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let highlight = Color::Indexed(86);
        let panel = Color::Rgb(0x3C, 0x3C, 0x3C);
        Theme {
            focused_line: Style::default().fg(highlight).bg(panel),
            blurred_line: Style::default().fg(Color::Indexed(240)),
            caret: Style::default().fg(highlight).bg(panel).add_modifier(Modifier::REVERSED),
            gutter: Style::default().fg(Color::Indexed(244)),
            footer: Style::default().fg(Color::Indexed(205)).bg(panel),
            browser_item: Style::default(),
            browser_selected: Style::default().fg(Color::Indexed(170)),
            browser_header: Style::default().add_modifier(Modifier::BOLD),
            active_tab: Style::default().fg(highlight).add_modifier(Modifier::BOLD),
            inactive_tab: Style::default().fg(Color::Indexed(244)),
            border: Style::default().fg(highlight),
            error: Style::default().fg(Color::Red),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Viewport height. `None` follows the terminal height.
    pub lines_displayed: Option<usize>,
    pub half_page: usize,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Config { lines_displayed: None, half_page: HALF_PAGE, theme: Theme::default() }
    }
}

impl Config {
    /// Viewport height for a text area `available` rows tall.
    pub fn viewport_height(&self, available: usize) -> usize {
        self.lines_displayed.unwrap_or(available).max(1)
    }

    /// Height used before the first frame is drawn.
    pub fn initial_lines_displayed(&self) -> usize {
        self.lines_displayed.unwrap_or(DEFAULT_LINES_DISPLAYED)
    }
}
