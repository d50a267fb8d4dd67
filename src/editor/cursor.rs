// src/editor/cursor.rs
use super::buffer::LineBuffer;

/// Column part of the cursor. `EndOfLine` follows the last column of
/// whichever line is focused and is only turned into a number on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Fixed(usize),
    EndOfLine,
}

impl Default for Column {
    fn default() -> Self {
        Column::Fixed(0)
    }
}

impl Column {
    /// Concrete column on a line of `len` characters.
    pub fn resolve(self, len: usize) -> usize {
        match self {
            Column::Fixed(col) => col.min(len),
            Column::EndOfLine => len,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: Column,
}

impl Cursor {
    pub fn new(row: usize, col: usize) -> Self {
        Cursor { row, col: Column::Fixed(col) }
    }

    /// Column on the cursor's own line.
    pub fn resolved_col(&self, buffer: &LineBuffer) -> usize {
        self.col.resolve(buffer.line_len(self.row))
    }

    pub fn move_left(&mut self, buffer: &LineBuffer) {
        let col = self.resolved_col(buffer);
        self.col = Column::Fixed(col.saturating_sub(1));
    }

    pub fn move_right(&mut self, buffer: &LineBuffer) {
        let len = buffer.line_len(self.row);
        let col = self.resolved_col(buffer);
        self.col = Column::Fixed((col + 1).min(len));
    }

    /// Moves the row by `delta`, clamped to the buffer. The stored column is
    /// kept so it can be reapplied to lines of different length.
    pub fn move_rows(&mut self, buffer: &LineBuffer, delta: isize) {
        let last = buffer.line_count().saturating_sub(1);
        self.row = self.row.saturating_add_signed(delta).min(last);
    }

    pub fn jump_to_row(&mut self, buffer: &LineBuffer, row: usize) {
        self.row = row.min(buffer.line_count().saturating_sub(1));
    }

    pub fn line_start(&mut self) {
        self.col = Column::Fixed(0);
    }

    pub fn line_end(&mut self) {
        self.col = Column::EndOfLine;
    }

    /// First non-space column of the focused line, stopping at the line end
    /// when the line is blank.
    pub fn first_non_blank(&mut self, buffer: &LineBuffer) {
        let col = buffer
            .line(self.row)
            .map(|line| line.text().chars().take_while(|&c| c == ' ').count())
            .unwrap_or(0);
        self.col = Column::Fixed(col);
    }
}
