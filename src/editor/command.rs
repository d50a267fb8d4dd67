// src/editor/command.rs
//! Extension point for operator/motion commands ("dw", "3yy", ...).
//!
//! No key sequence is recognised yet: `PendingCommand::parse` never yields a
//! command, so unmapped Normal-mode keys only accumulate until Escape.

use super::buffer::LineBuffer;
use super::cursor::Cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Motion,
    Operator,
    TextObject,
}

pub trait Command {
    fn kind(&self) -> CommandKind;
    fn execute(&self, buffer: &mut LineBuffer, cursor: &mut Cursor);
}

/// Keys typed in Normal mode that are not single-key commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingCommand {
    keys: String,
}

impl PendingCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: char) {
        if key == ' ' {
            return;
        }
        self.keys.push(key);
    }

    pub fn as_str(&self) -> &str {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    // TODO: define the operator/motion grammar before returning commands here.
    pub fn parse(&self) -> Option<Box<dyn Command>> {
        None
    }
}
