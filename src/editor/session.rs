// src/editor/session.rs
use std::path::{Path, PathBuf};

use crossterm::event::KeyEvent;

use super::buffer::{Line, LineBuffer};
use super::command::PendingCommand;
use super::cursor::{Column, Cursor};
use super::keymap::{self, BrowserAction, KeyAction};
use super::mode::{Mode, SessionState};
use super::viewport::{self, ViewportLine};
use crate::config::Config;
use crate::error::Result;
use crate::filesystem::DirectoryBrowser;

/// One open file: its lines, cursor, mode and directory browser.
///
/// While the browser is visible every key goes to it and buffer motions are
/// suppressed. A file picked in the browser replaces the buffer and resets
/// the cursor.
#[derive(Debug, Clone)]
pub struct EditorSession {
    path: Option<PathBuf>,
    buffer: LineBuffer,
    cursor: Cursor,
    mode: Mode,
    pending: PendingCommand,
    browser: DirectoryBrowser,
    lines_displayed: usize,
    half_page: usize,
    message: Option<String>,
}

impl EditorSession {
    /// Loads `path` and points the browser at the file's directory.
    pub fn open(path: impl Into<PathBuf>, config: &Config) -> Result<Self> {
        let path = path.into();
        let buffer = LineBuffer::load(&path)?;
        let start = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let browser = DirectoryBrowser::open(PathBuf::new(), start)?;
        log::info!("opened {}", path.display());
        Ok(Self::assemble(Some(path), buffer, browser, config))
    }

    /// Session with no file yet: an empty buffer and the browser showing `dir`.
    pub fn browse(dir: impl Into<PathBuf>, config: &Config) -> Result<Self> {
        let mut browser = DirectoryBrowser::open(PathBuf::new(), dir)?;
        browser.show();
        Ok(Self::assemble(None, LineBuffer::new(), browser, config))
    }

    fn assemble(path: Option<PathBuf>, buffer: LineBuffer, browser: DirectoryBrowser, config: &Config) -> Self {
        EditorSession {
            path,
            buffer,
            cursor: Cursor::default(),
            mode: Mode::Normal,
            pending: PendingCommand::new(),
            browser,
            lines_displayed: config.initial_lines_displayed(),
            half_page: config.half_page,
            message: None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn display_name(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => "[No Name]".to_string(),
        }
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Cursor column with the end-of-line marker resolved.
    pub fn cursor_col(&self) -> usize {
        self.cursor.resolved_col(&self.buffer)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> SessionState {
        SessionState::from_parts(self.browser.is_visible(), self.mode)
    }

    pub fn browser(&self) -> &DirectoryBrowser {
        &self.browser
    }

    pub fn pending(&self) -> &PendingCommand {
        &self.pending
    }

    /// Last recoverable error, shown until the next successful file action.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn lines_displayed(&self) -> usize {
        self.lines_displayed
    }

    pub fn set_lines_displayed(&mut self, lines: usize) {
        self.lines_displayed = lines.max(1);
    }

    pub fn viewport(&self) -> Vec<ViewportLine<'_>> {
        viewport::render(&self.buffer, self.cursor.row, self.lines_displayed)
    }

    pub fn status_line(&self, width: usize) -> String {
        viewport::status_line(
            &self.display_name(),
            self.cursor.row,
            self.cursor_col(),
            self.buffer.line_count(),
            width,
        )
    }

    pub fn handle_key(&mut self, key: &KeyEvent) {
        if self.browser.is_visible() {
            self.apply_browser(keymap::resolve_browser(key));
        } else {
            self.apply(keymap::resolve(key, self.mode));
        }
    }

    pub fn apply_browser(&mut self, action: BrowserAction) {
        match action {
            BrowserAction::Up => self.browser.move_up(),
            BrowserAction::Down => self.browser.move_down(),
            BrowserAction::Backspace => self.browser.backspace(),
            BrowserAction::Type(c) => self.browser.type_char(c),
            BrowserAction::Hide => self.browser.hide(),
            BrowserAction::Confirm => match self.browser.confirm() {
                Ok(Some(path)) => self.switch_file(path),
                Ok(None) => self.message = None,
                Err(err) => {
                    log::warn!("{}", err);
                    self.message = Some(err.to_string());
                }
            },
            BrowserAction::Ignore => {}
        }
    }

    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::MoveLeft => {
                self.cursor.move_left(&self.buffer);
                self.sync_caret();
            }
            KeyAction::MoveRight => {
                self.cursor.move_right(&self.buffer);
                self.sync_caret();
            }
            KeyAction::MoveUp => self.move_rows(-1),
            KeyAction::MoveDown => self.move_rows(1),
            KeyAction::HalfPageUp => self.move_rows(-(self.half_page as isize)),
            KeyAction::HalfPageDown => self.move_rows(self.half_page as isize),
            KeyAction::JumpLast => {
                let last = self.buffer.line_count().saturating_sub(1);
                self.change_row(|cursor, buffer| cursor.jump_to_row(buffer, last));
            }
            KeyAction::LineStart => {
                self.cursor.line_start();
                self.sync_caret();
            }
            KeyAction::LineEnd => {
                self.cursor.line_end();
                self.sync_caret();
            }
            KeyAction::FirstNonBlank => {
                self.cursor.first_non_blank(&self.buffer);
                self.sync_caret();
            }
            KeyAction::EnterInsert => self.mode = Mode::Insert,
            KeyAction::Append => {
                self.cursor.move_right(&self.buffer);
                self.sync_caret();
                self.mode = Mode::Insert;
            }
            KeyAction::OpenLine => {
                self.mode = Mode::Insert;
                let row = self.cursor.row + 1;
                self.buffer.insert_line(row, Default::default());
                self.cursor.col = Column::Fixed(0);
                self.change_row(|cursor, buffer| cursor.jump_to_row(buffer, row));
            }
            KeyAction::Escape => self.escape(),
            KeyAction::ToggleBrowser => self.browser.toggle(),
            KeyAction::InsertChar(c) => self.edit_line(|line| {
                line.insert_char(c);
            }),
            KeyAction::Backspace => self.edit_line(|line| {
                line.delete_before_caret();
            }),
            KeyAction::Delete => self.edit_line(|line| {
                line.delete_at_caret();
            }),
            KeyAction::SplitLine => self.split_line(),
            KeyAction::Pending(c) => {
                self.pending.push(c);
                if let Some(command) = self.pending.parse() {
                    command.execute(&mut self.buffer, &mut self.cursor);
                    self.pending.clear();
                }
            }
            KeyAction::Ignore => {}
        }
    }

    /// Hides the browser, else drops pending keys, else returns to Normal.
    pub fn escape(&mut self) {
        if self.browser.is_visible() {
            self.browser.hide();
        } else if !self.pending.is_empty() {
            self.pending.clear();
        } else {
            self.mode = Mode::Normal;
        }
    }

    /// Replaces the buffer with `path`. On failure the old buffer stays and
    /// the browser is shown again with the error.
    pub fn switch_file(&mut self, path: PathBuf) {
        match LineBuffer::load(&path) {
            Ok(buffer) => {
                log::info!("switched to {}", path.display());
                self.buffer = buffer;
                self.cursor = Cursor::default();
                self.mode = Mode::Normal;
                self.pending.clear();
                self.path = Some(path);
                self.message = None;
            }
            Err(err) => {
                log::warn!("{}", err);
                self.message = Some(err.to_string());
                self.browser.show();
            }
        }
    }

    fn move_rows(&mut self, delta: isize) {
        self.change_row(|cursor, buffer| cursor.move_rows(buffer, delta));
    }

    /// Runs a row motion and hands focus to the new row.
    fn change_row(&mut self, motion: impl FnOnce(&mut Cursor, &LineBuffer)) {
        let from = self.cursor.row;
        motion(&mut self.cursor, &self.buffer);
        let caret = self.cursor_col();
        self.buffer.transfer_focus(from, self.cursor.row, caret);
    }

    fn sync_caret(&mut self) {
        let caret = self.cursor_col();
        if let Some(line) = self.buffer.line_mut(self.cursor.row) {
            line.set_caret(caret);
        }
    }

    fn edit_line(&mut self, edit: impl FnOnce(&mut Line)) {
        self.sync_caret();
        if let Some(line) = self.buffer.line_mut(self.cursor.row) {
            edit(line);
            self.cursor.col = Column::Fixed(line.caret());
        }
    }

    fn split_line(&mut self) {
        self.sync_caret();
        let Some(tail) = self.buffer.line_mut(self.cursor.row).map(|line| line.split_at_caret()) else {
            return;
        };
        let row = self.cursor.row + 1;
        self.buffer.insert_line(row, tail);
        self.cursor.col = Column::Fixed(0);
        self.change_row(|cursor, buffer| cursor.jump_to_row(buffer, row));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn session_with(contents: &str) -> (tempfile::TempDir, EditorSession) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.txt");
        fs::write(&path, contents).unwrap();
        let session = EditorSession::open(&path, &Config::default()).unwrap();
        (dir, session)
    }

    fn focused_rows(session: &EditorSession) -> Vec<usize> {
        session
            .buffer()
            .lines()
            .iter()
            .enumerate()
            .filter(|(_, line)| line.is_focused())
            .map(|(row, _)| row)
            .collect()
    }

    #[test]
    fn starts_at_origin_in_normal_mode() {
        let (_dir, session) = session_with("a\nb\nc\n");
        assert_eq!(session.cursor(), Cursor::new(0, 0));
        assert_eq!(session.state(), SessionState::EditingNormal);
        assert_eq!(focused_rows(&session), vec![0]);
    }

    #[test]
    fn row_motions_move_focus() {
        let (_dir, mut session) = session_with("a\nb\nc\n");
        session.apply(KeyAction::MoveDown);
        session.apply(KeyAction::MoveDown);
        assert_eq!(session.cursor().row, 2);
        assert_eq!(focused_rows(&session), vec![2]);
        session.apply(KeyAction::MoveDown);
        assert_eq!(session.cursor().row, 2);
        session.apply(KeyAction::MoveUp);
        assert_eq!(focused_rows(&session), vec![1]);
    }

    #[test]
    fn append_moves_right_before_inserting() {
        let (_dir, mut session) = session_with("ab\n");
        session.apply(KeyAction::Append);
        assert_eq!(session.mode(), Mode::Insert);
        session.apply(KeyAction::InsertChar('X'));
        assert_eq!(session.buffer().line(0).unwrap().text(), "aXb");
        assert_eq!(session.cursor_col(), 2);
    }

    #[test]
    fn open_line_inserts_below_and_enters_insert() {
        let (_dir, mut session) = session_with("first\nsecond\n");
        session.apply(KeyAction::OpenLine);
        assert_eq!(session.mode(), Mode::Insert);
        assert_eq!(session.buffer().line_count(), 3);
        assert_eq!(session.cursor().row, 1);
        assert_eq!(session.buffer().line(1).unwrap().text(), "");
        assert_eq!(session.buffer().line(2).unwrap().text(), "second");
        assert_eq!(focused_rows(&session), vec![1]);
    }

    #[test]
    fn insert_mode_edits_the_focused_line() {
        let (_dir, mut session) = session_with("hello\n");
        session.apply(KeyAction::LineEnd);
        session.apply(KeyAction::EnterInsert);
        for c in " you".chars() {
            session.apply(KeyAction::InsertChar(c));
        }
        session.apply(KeyAction::Backspace);
        assert_eq!(session.buffer().line(0).unwrap().text(), "hello yo");
        assert_eq!(session.cursor_col(), 8);

        session.apply(KeyAction::LineStart);
        session.apply(KeyAction::Delete);
        assert_eq!(session.buffer().line(0).unwrap().text(), "ello yo");
    }

    #[test]
    fn split_line_carries_the_tail() {
        let (_dir, mut session) = session_with("hello world\n");
        for _ in 0..5 {
            session.apply(KeyAction::MoveRight);
        }
        session.apply(KeyAction::EnterInsert);
        session.apply(KeyAction::SplitLine);
        assert_eq!(session.buffer().line(0).unwrap().text(), "hello");
        assert_eq!(session.buffer().line(1).unwrap().text(), " world");
        assert_eq!(session.cursor(), Cursor::new(1, 0));
    }

    #[test]
    fn escape_clears_pending_before_leaving_insert() {
        let (_dir, mut session) = session_with("x\n");
        session.apply(KeyAction::Pending('d'));
        session.apply(KeyAction::Pending('w'));
        assert_eq!(session.pending().as_str(), "dw");
        session.apply(KeyAction::Escape);
        assert!(session.pending().is_empty());

        session.apply(KeyAction::EnterInsert);
        session.apply(KeyAction::Escape);
        assert_eq!(session.mode(), Mode::Normal);
    }

    #[test]
    fn escape_hides_a_visible_browser_first() {
        let (_dir, mut session) = session_with("x\n");
        session.apply(KeyAction::EnterInsert);
        session.apply(KeyAction::ToggleBrowser);
        assert_eq!(session.state(), SessionState::BrowsingFiles);
        session.escape();
        assert_eq!(session.state(), SessionState::EditingInsert);
    }

    #[test]
    fn browsing_suppresses_motions() {
        let (_dir, mut session) = session_with("a\nb\n");
        session.apply(KeyAction::ToggleBrowser);
        let key = KeyEvent::from(crossterm::event::KeyCode::Char('j'));
        session.handle_key(&key);
        assert_eq!(session.cursor().row, 0);
        assert_eq!(session.browser().search_text(), "j");
    }

    #[test]
    fn failed_switch_keeps_the_buffer() {
        let (dir, mut session) = session_with("keep\n");
        session.switch_file(dir.path().join("gone.txt"));
        assert_eq!(session.buffer().line(0).unwrap().text(), "keep");
        assert!(session.message().is_some());
        assert_eq!(session.state(), SessionState::BrowsingFiles);
    }

    #[test]
    fn unreadable_directory_is_reported_and_browsing_continues() {
        let (dir, mut session) = session_with("keep\n");
        fs::create_dir(dir.path().join("sub")).unwrap();
        session.apply(KeyAction::ToggleBrowser);
        for c in "sub".chars() {
            session.apply_browser(BrowserAction::Type(c));
        }
        assert_eq!(session.browser().filtered_names(), vec!["sub"]);

        fs::remove_dir(dir.path().join("sub")).unwrap();
        session.apply_browser(BrowserAction::Confirm);

        assert!(session.message().is_some_and(|m| m.contains("sub")));
        assert_eq!(session.state(), SessionState::BrowsingFiles);
        assert_eq!(session.browser().current_dir(), dir.path());
        assert_eq!(session.browser().search_text(), "sub");
        assert_eq!(session.buffer().line(0).unwrap().text(), "keep");
    }

    #[test]
    fn status_line_resolves_end_of_line() {
        let (_dir, mut session) = session_with("abc\nlonger line\n");
        session.apply(KeyAction::LineEnd);
        assert!(session.status_line(10).ends_with("1,3,0%"));
        session.apply(KeyAction::MoveDown);
        assert!(session.status_line(10).ends_with("2,11,50%"));
    }
}
