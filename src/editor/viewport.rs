// src/editor/viewport.rs
//! The viewport is recomputed on every frame: it grows alternately above and
//! below the cursor row until it is full or the buffer runs out.

use std::collections::VecDeque;

use super::buffer::{Line, LineBuffer};

/// Default viewport height when the terminal size is not known.
pub const DEFAULT_LINES_DISPLAYED: usize = 31;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportLine<'a> {
    pub row: usize,
    /// Gutter text: absolute number on the cursor row, distance elsewhere.
    pub label: String,
    pub line: &'a Line,
}

/// Rows shown for a cursor at `cursor_row`, top to bottom.
pub fn window_rows(cursor_row: usize, line_count: usize, lines_displayed: usize) -> Vec<usize> {
    let mut rows = VecDeque::with_capacity(lines_displayed.min(line_count));
    let mut left = (cursor_row < line_count).then_some(cursor_row);
    let mut right = cursor_row + 1;

    while rows.len() < lines_displayed && (left.is_some() || right < line_count) {
        if let Some(row) = left {
            rows.push_front(row);
            left = row.checked_sub(1);
        }
        if rows.len() >= lines_displayed {
            break;
        }
        if right < line_count {
            rows.push_back(right);
            right += 1;
        }
    }

    rows.into()
}

pub fn digit_count(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        digits += 1;
        n /= 10;
    }
    digits
}

/// Gutter width shared by every label of a buffer with `line_count` lines.
pub fn gutter_width(line_count: usize) -> usize {
    digit_count(line_count) + 2
}

pub fn line_label(row: usize, cursor_row: usize) -> usize {
    if row == cursor_row {
        row + 1
    } else {
        row.abs_diff(cursor_row)
    }
}

/// Right-aligns `number` so that the label, separator included, is `width` wide.
pub fn format_label(number: usize, width: usize) -> String {
    format!("{:>w$} ", number, w = width.saturating_sub(1))
}

pub fn render(buffer: &LineBuffer, cursor_row: usize, lines_displayed: usize) -> Vec<ViewportLine<'_>> {
    let width = gutter_width(buffer.line_count());
    window_rows(cursor_row, buffer.line_count(), lines_displayed)
        .into_iter()
        .filter_map(|row| {
            buffer.line(row).map(|line| ViewportLine {
                row,
                label: format_label(line_label(row, cursor_row), width),
                line,
            })
        })
        .collect()
}

pub fn percent_through(row: usize, line_count: usize) -> usize {
    if line_count == 0 {
        return 0;
    }
    100 * row / line_count
}

/// `name`, padding to `width`, then `row,col,percent%`. The name is cut
/// short when the width cannot hold both; the position always survives.
pub fn status_line(name: &str, row: usize, col: usize, line_count: usize, width: usize) -> String {
    let position = format!("{},{},{}%", row + 1, col, percent_through(row, line_count));
    let room = width.saturating_sub(position.chars().count() + 1);
    let name: String = name.chars().take(room).collect();
    if name.is_empty() {
        return position;
    }
    let used = name.chars().count() + position.chars().count();
    let padding = width.saturating_sub(used).max(1);
    format!("{}{}{}", name, " ".repeat(padding), position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_alternates_around_the_cursor() {
        assert_eq!(window_rows(5, 10, 3), vec![4, 5, 6]);
        assert_eq!(window_rows(5, 10, 4), vec![4, 5, 6, 7]);
        assert_eq!(window_rows(0, 10, 3), vec![0, 1, 2]);
        assert_eq!(window_rows(9, 10, 3), vec![7, 8, 9]);
    }

    #[test]
    fn window_is_bounded_by_the_buffer() {
        assert_eq!(window_rows(1, 3, 31), vec![0, 1, 2]);
        assert_eq!(window_rows(0, 1, 31), vec![0]);
    }

    #[test]
    fn labels_are_relative_except_the_cursor_row() {
        assert_eq!(line_label(4, 4), 5);
        assert_eq!(line_label(1, 4), 3);
        assert_eq!(line_label(7, 4), 3);
    }

    #[test]
    fn labels_share_the_gutter_width() {
        let width = gutter_width(120);
        assert_eq!(width, 5);
        assert_eq!(format_label(7, width), "   7 ");
        assert_eq!(format_label(120, width), " 120 ");
    }

    #[test]
    fn render_labels_each_visible_line() {
        let buffer = LineBuffer::from_lines(["a", "b", "c", "d"]);
        let lines = render(&buffer, 2, 3);
        let rows: Vec<usize> = lines.iter().map(|l| l.row).collect();
        assert_eq!(rows, vec![1, 2, 3]);
        assert_eq!(lines[1].label, " 3 ");
        assert_eq!(lines[0].label, " 1 ");
        assert_eq!(lines[1].line.text(), "c");
    }

    #[test]
    fn status_line_fills_the_width() {
        let status = status_line("notes.txt", 4, 2, 10, 30);
        assert_eq!(status.chars().count(), 30);
        assert!(status.starts_with("notes.txt "));
        assert!(status.ends_with("5,2,40%"));
    }

    #[test]
    fn narrow_status_line_shortens_the_name() {
        assert_eq!(status_line("notes.txt", 0, 0, 1, 10), "not 1,0,0%");
        assert_eq!(status_line("notes.txt", 0, 0, 1, 7), "1,0,0%");
        assert_eq!(status_line("notes.txt", 0, 0, 1, 3), "1,0,0%");
    }
}
