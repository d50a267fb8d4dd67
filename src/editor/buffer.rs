// src/editor/buffer.rs
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{EditorError, Result};

/// A single editable line. Each line owns its caret and knows whether it
/// currently holds input focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    text: String,
    caret: usize,
    focused: bool,
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        Line { text: text.into(), caret: 0, focused: false }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Places the caret, clamped to the end of the line.
    pub fn set_caret(&mut self, col: usize) {
        self.caret = col.min(self.len());
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_index(self.caret);
        self.text.insert(at, ch);
        self.caret += 1;
    }

    /// Removes the character left of the caret. Returns false at column 0.
    pub fn delete_before_caret(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        let at = self.byte_index(self.caret - 1);
        self.text.remove(at);
        self.caret -= 1;
        true
    }

    /// Removes the character under the caret. Returns false at end of line.
    pub fn delete_at_caret(&mut self) -> bool {
        if self.caret >= self.len() {
            return false;
        }
        let at = self.byte_index(self.caret);
        self.text.remove(at);
        true
    }

    /// Cuts everything from the caret onwards into a new, unfocused line.
    pub fn split_at_caret(&mut self) -> Line {
        let at = self.byte_index(self.caret);
        Line::new(self.text.split_off(at))
    }

    fn byte_index(&self, col: usize) -> usize {
        self.text
            .char_indices()
            .nth(col)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }
}

/// Ordered lines of one file. Never empty: a file without records still
/// yields a single empty line so that row 0 is always addressable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<Line>,
}

impl Default for LineBuffer {
    fn default() -> Self {
        LineBuffer::new()
    }
}

impl LineBuffer {
    pub fn new() -> Self {
        LineBuffer::from_lines(Vec::<String>::new())
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<Line> = lines.into_iter().map(Line::new).collect();
        if lines.is_empty() {
            lines.push(Line::default());
        }
        lines[0].focus();
        LineBuffer { lines }
    }

    /// Reads `path` one newline-delimited record at a time. Bytes that are
    /// not UTF-8 are replaced rather than rejected. The handle is closed
    /// before returning.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| EditorError::io(path, e))?;
        let lines = BufReader::new(file)
            .split(b'\n')
            .map(|record| record.map(decode_record))
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(|e| EditorError::io(path, e))?;
        log::debug!("loaded {} lines from {}", lines.len(), path.display());
        Ok(LineBuffer::from_lines(lines))
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    pub fn line_mut(&mut self, row: usize) -> Option<&mut Line> {
        self.lines.get_mut(row)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Length of line `row`, or 0 when the row does not exist.
    pub fn line_len(&self, row: usize) -> usize {
        self.line(row).map(Line::len).unwrap_or(0)
    }

    /// Inserts `line` so that it ends up at index `at` (clamped to the end).
    pub fn insert_line(&mut self, at: usize, line: Line) {
        let at = at.min(self.lines.len());
        self.lines.insert(at, line);
    }

    /// Moves input focus from row `from` to row `to` and applies `caret`
    /// to the newly focused line.
    pub fn transfer_focus(&mut self, from: usize, to: usize, caret: usize) {
        if let Some(old) = self.lines.get_mut(from) {
            old.blur();
        }
        if let Some(new) = self.lines.get_mut(to) {
            new.focus();
            new.set_caret(caret);
        }
    }
}

fn decode_record(mut bytes: Vec<u8>) -> String {
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }
    String::from_utf8_lossy(&bytes).into_owned()
}
