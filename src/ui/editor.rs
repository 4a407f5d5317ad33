//! Working text buffer for the editor pane.
//!
//! A small line-oriented buffer: a `Vec` of lines plus a char-indexed
//! cursor. Column positions are character indexes, converted to byte indexes
//! only at the point of mutation, so multi-byte input behaves.

/// The editor's working text and cursor.
#[derive(Debug, Clone)]
pub struct EditorBuffer {
    lines: Vec<String>,
    pub cursor_row: usize,
    /// Char index within the current line.
    pub cursor_col: usize,
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorBuffer {
    pub fn new() -> Self {
        EditorBuffer {
            lines: vec![String::new()],
            cursor_row: 0,
            cursor_col: 0,
        }
    }

    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        EditorBuffer {
            lines,
            cursor_row: 0,
            cursor_col: 0,
        }
    }

    /// Replace the whole buffer and reset the cursor.
    pub fn set_text(&mut self, text: &str) {
        *self = EditorBuffer::from_text(text);
    }

    /// The buffer joined with newlines; what gets executed and saved.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    fn current_len(&self) -> usize {
        self.lines[self.cursor_row].chars().count()
    }

    fn byte_index(line: &str, char_idx: usize) -> usize {
        line.char_indices()
            .nth(char_idx)
            .map_or(line.len(), |(i, _)| i)
    }

    pub fn insert_char(&mut self, c: char) {
        let idx = Self::byte_index(&self.lines[self.cursor_row], self.cursor_col);
        self.lines[self.cursor_row].insert(idx, c);
        self.cursor_col += 1;
    }

    pub fn insert_newline(&mut self) {
        let idx = Self::byte_index(&self.lines[self.cursor_row], self.cursor_col);
        let rest = self.lines[self.cursor_row].split_off(idx);
        self.lines.insert(self.cursor_row + 1, rest);
        self.cursor_row += 1;
        self.cursor_col = 0;
    }

    pub fn backspace(&mut self) {
        if self.cursor_col > 0 {
            let line = &self.lines[self.cursor_row];
            let start = Self::byte_index(line, self.cursor_col - 1);
            let end = Self::byte_index(line, self.cursor_col);
            self.lines[self.cursor_row].drain(start..end);
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            // Join with the previous line.
            let tail = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = self.current_len();
            self.lines[self.cursor_row].push_str(&tail);
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor_col < self.current_len() {
            let line = &self.lines[self.cursor_row];
            let start = Self::byte_index(line, self.cursor_col);
            let end = Self::byte_index(line, self.cursor_col + 1);
            self.lines[self.cursor_row].drain(start..end);
        } else if self.cursor_row + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor_row + 1);
            self.lines[self.cursor_row].push_str(&next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.current_len();
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor_col < self.current_len() {
            self.cursor_col += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.cursor_col.min(self.current_len());
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = self.cursor_col.min(self.current_len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_col = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_col = self.current_len();
    }

    pub fn page_up(&mut self, jump: usize) {
        self.cursor_row = self.cursor_row.saturating_sub(jump);
        self.cursor_col = self.cursor_col.min(self.current_len());
    }

    pub fn page_down(&mut self, jump: usize) {
        self.cursor_row = (self.cursor_row + jump).min(self.lines.len() - 1);
        self.cursor_col = self.cursor_col.min(self.current_len());
    }
}
