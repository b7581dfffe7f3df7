//! Word wrapping for the conversation pane.
//!
//! Text is wrapped here, before it reaches ratatui, so the renderer knows the
//! exact number of rows it will occupy and can clamp the scroll offset against
//! it. Widths are display columns (`unicode-width`), not chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` to `width` columns. Hard line breaks are kept; words longer
/// than a full row are split at the column limit. A width of zero disables
/// wrapping.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| wrap_line(line, width))
        .collect()
}

pub fn count_wrapped_lines(text: &str, width: usize) -> usize {
    wrap_text(text, width).len()
}

fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 || UnicodeWidthStr::width(line) <= width {
        return vec![line.to_string()];
    }

    let mut builder = RowBuilder::new(width);
    for segment in segments(line) {
        if segment.starts_with(char::is_whitespace) {
            builder.push_spaces(segment);
        } else {
            builder.push_word(segment);
        }
    }
    builder.finish()
}

/// Splits a line into alternating runs of whitespace and non-whitespace.
fn segments(line: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;
    for (idx, ch) in line.char_indices() {
        let is_space = ch.is_whitespace();
        match in_space {
            Some(prev) if prev != is_space => {
                out.push(&line[start..idx]);
                start = idx;
            }
            _ => {}
        }
        in_space = Some(is_space);
    }
    if start < line.len() {
        out.push(&line[start..]);
    }
    out
}

struct RowBuilder {
    width: usize,
    rows: Vec<String>,
    current: String,
    current_width: usize,
}

impl RowBuilder {
    fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
            current: String::new(),
            current_width: 0,
        }
    }

    fn break_row(&mut self) {
        let row = std::mem::take(&mut self.current);
        self.rows.push(row.trim_end().to_string());
        self.current_width = 0;
    }

    fn push_spaces(&mut self, spaces: &str) {
        let spaces_width = UnicodeWidthStr::width(spaces);
        if self.current_width + spaces_width <= self.width {
            self.current.push_str(spaces);
            self.current_width += spaces_width;
        } else if self.current_width > 0 {
            // Whitespace at a soft break is dropped.
            self.break_row();
        }
    }

    fn push_word(&mut self, word: &str) {
        let word_width = UnicodeWidthStr::width(word);
        if self.current_width + word_width <= self.width {
            self.current.push_str(word);
            self.current_width += word_width;
            return;
        }

        if word_width <= self.width {
            self.break_row();
            self.current.push_str(word);
            self.current_width = word_width;
            return;
        }

        for ch in word.chars() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if self.current_width > 0 && self.current_width + ch_width > self.width {
                self.break_row();
            }
            self.current.push(ch);
            self.current_width += ch_width;
        }
    }

    fn finish(mut self) -> Vec<String> {
        if self.current_width > 0 || self.rows.is_empty() {
            self.break_row();
        }
        self.rows
    }
}
