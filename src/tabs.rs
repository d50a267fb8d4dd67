// src/tabs.rs
use std::path::PathBuf;

use crossterm::event::KeyEvent;

use crate::config::Config;
use crate::editor::keymap::{self, TabAction};
use crate::editor::EditorSession;
use crate::error::{EditorError, Result};

pub const MAX_TABS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Owns one session per open path and routes keys to the active one.
#[derive(Debug)]
pub struct TabController {
    tabs: Vec<EditorSession>,
    active: usize,
}

impl TabController {
    pub fn new(tabs: Vec<EditorSession>) -> Result<Self> {
        if tabs.is_empty() || tabs.len() > MAX_TABS {
            return Err(EditorError::Argument(format!(
                "between 1 and {} tabs can be open (got {})",
                MAX_TABS,
                tabs.len()
            )));
        }
        Ok(TabController { tabs, active: 0 })
    }

    /// One tab per path; a directory opens a tab that starts in the browser.
    pub fn open(paths: &[PathBuf], config: &Config) -> Result<Self> {
        let tabs = paths
            .iter()
            .map(|path| {
                if path.is_dir() {
                    EditorSession::browse(path, config)
                } else {
                    EditorSession::open(path, config)
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(tabs)
    }

    pub fn tabs(&self) -> &[EditorSession] {
        &self.tabs
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &EditorSession {
        &self.tabs[self.active]
    }

    pub fn active_mut(&mut self) -> &mut EditorSession {
        &mut self.tabs[self.active]
    }

    /// Tab title: the session's path without a leading `./`.
    pub fn label(&self, index: usize) -> String {
        let name = self.tabs.get(index).map(EditorSession::display_name).unwrap_or_default();
        match name.strip_prefix("./") {
            Some(stripped) => stripped.to_string(),
            None => name,
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> Outcome {
        match keymap::resolve_tab(key, self.active().state()) {
            TabAction::Quit => return Outcome::Quit,
            TabAction::PreviousTab => self.active = self.active.saturating_sub(1),
            TabAction::NextTab => self.active = (self.active + 1).min(self.tabs.len() - 1),
            TabAction::Forward => self.active_mut().handle_key(key),
        }
        log::trace!("active tab {}", self.active);
        Outcome::Continue
    }
}
