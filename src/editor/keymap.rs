// src/editor/keymap.rs
//! Key events are turned into closed sets of actions once per event; the
//! session and the browser only ever match on these enums.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::mode::{Mode, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    JumpLast,
    HalfPageDown,
    HalfPageUp,
    LineStart,
    LineEnd,
    FirstNonBlank,
    EnterInsert,
    Append,
    OpenLine,
    Escape,
    ToggleBrowser,
    InsertChar(char),
    Backspace,
    Delete,
    SplitLine,
    /// Unmapped Normal-mode key, fed to the pending-command accumulator.
    Pending(char),
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserAction {
    Up,
    Down,
    Confirm,
    Backspace,
    Hide,
    Type(char),
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabAction {
    PreviousTab,
    NextTab,
    Quit,
    Forward,
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

/// Printable character typed without Control or Alt.
fn plain_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => Some(c),
        _ => None,
    }
}

pub fn is_browser_toggle(key: &KeyEvent) -> bool {
    is_ctrl(key, 'p')
}

/// Tab-level routing, evaluated before the session sees the key.
pub fn resolve_tab(key: &KeyEvent, state: SessionState) -> TabAction {
    if is_ctrl(key, 'q') {
        return TabAction::Quit;
    }
    if state == SessionState::BrowsingFiles {
        return TabAction::Forward;
    }
    match key.code {
        KeyCode::Left => TabAction::PreviousTab,
        KeyCode::Right => TabAction::NextTab,
        KeyCode::Char('q') if state == SessionState::EditingNormal && plain_char(key).is_some() => TabAction::Quit,
        _ => TabAction::Forward,
    }
}

pub fn resolve(key: &KeyEvent, mode: Mode) -> KeyAction {
    if is_browser_toggle(key) {
        return KeyAction::ToggleBrowser;
    }
    if key.code == KeyCode::Esc || is_ctrl(key, 'c') {
        return KeyAction::Escape;
    }
    match mode {
        Mode::Normal => resolve_normal(key),
        Mode::Insert => resolve_insert(key),
    }
}

fn resolve_normal(key: &KeyEvent) -> KeyAction {
    if is_ctrl(key, 'd') {
        return KeyAction::HalfPageDown;
    }
    if is_ctrl(key, 'u') {
        return KeyAction::HalfPageUp;
    }
    match key.code {
        KeyCode::Up => return KeyAction::MoveUp,
        KeyCode::Down => return KeyAction::MoveDown,
        _ => {}
    }
    match plain_char(key) {
        Some('h') => KeyAction::MoveLeft,
        Some('l') => KeyAction::MoveRight,
        Some('j') => KeyAction::MoveDown,
        Some('k') => KeyAction::MoveUp,
        Some('G') => KeyAction::JumpLast,
        Some('0') => KeyAction::LineStart,
        Some('$') => KeyAction::LineEnd,
        Some('^') => KeyAction::FirstNonBlank,
        Some('i') => KeyAction::EnterInsert,
        Some('a') => KeyAction::Append,
        Some('o') => KeyAction::OpenLine,
        Some(c) => KeyAction::Pending(c),
        None => KeyAction::Ignore,
    }
}

fn resolve_insert(key: &KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Up => KeyAction::MoveUp,
        KeyCode::Down => KeyAction::MoveDown,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Delete => KeyAction::Delete,
        KeyCode::Enter => KeyAction::SplitLine,
        _ => plain_char(key).map(KeyAction::InsertChar).unwrap_or(KeyAction::Ignore),
    }
}

pub fn resolve_browser(key: &KeyEvent) -> BrowserAction {
    if is_browser_toggle(key) {
        return BrowserAction::Hide;
    }
    match key.code {
        KeyCode::Up => BrowserAction::Up,
        KeyCode::Down => BrowserAction::Down,
        KeyCode::Enter => BrowserAction::Confirm,
        KeyCode::Backspace | KeyCode::Delete => BrowserAction::Backspace,
        KeyCode::Esc => BrowserAction::Hide,
        _ => plain_char(key).map(BrowserAction::Type).unwrap_or(BrowserAction::Ignore),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn normal_mode_motions() {
        assert_eq!(resolve(&key(KeyCode::Char('j')), Mode::Normal), KeyAction::MoveDown);
        assert_eq!(
            resolve(&KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT), Mode::Normal),
            KeyAction::JumpLast
        );
        assert_eq!(resolve(&ctrl('u'), Mode::Normal), KeyAction::HalfPageUp);
        assert_eq!(resolve(&key(KeyCode::Char('d')), Mode::Normal), KeyAction::Pending('d'));
    }

    #[test]
    fn insert_mode_takes_letters_literally() {
        assert_eq!(resolve(&key(KeyCode::Char('j')), Mode::Insert), KeyAction::InsertChar('j'));
        assert_eq!(resolve(&key(KeyCode::Esc), Mode::Insert), KeyAction::Escape);
        assert_eq!(resolve(&ctrl('p'), Mode::Insert), KeyAction::ToggleBrowser);
    }

    #[test]
    fn tab_routing_depends_on_state() {
        let q = key(KeyCode::Char('q'));
        assert_eq!(resolve_tab(&q, SessionState::EditingNormal), TabAction::Quit);
        assert_eq!(resolve_tab(&q, SessionState::EditingInsert), TabAction::Forward);
        assert_eq!(resolve_tab(&key(KeyCode::Left), SessionState::BrowsingFiles), TabAction::Forward);
        assert_eq!(resolve_tab(&key(KeyCode::Right), SessionState::EditingInsert), TabAction::NextTab);
        assert_eq!(resolve_tab(&ctrl('q'), SessionState::BrowsingFiles), TabAction::Quit);
    }

    #[test]
    fn browser_keys() {
        assert_eq!(resolve_browser(&key(KeyCode::Delete)), BrowserAction::Backspace);
        assert_eq!(resolve_browser(&key(KeyCode::Char('x'))), BrowserAction::Type('x'));
        assert_eq!(resolve_browser(&ctrl('p')), BrowserAction::Hide);
    }
}
