//! Editor pane rendering
//!
//! Displays the working buffer with a line-number gutter, breakpoint markers,
//! the debug current-line highlight, and basic Lua syntax highlighting.
//!
//! The highlighter is a simple character-by-character tokenizer; it colors
//! keywords, strings, numbers and `--` comments without a full lexer.

use crate::ui::editor::EditorBuffer;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Columns taken by the breakpoint marker, line number and trailing space.
pub const GUTTER_WIDTH: u16 = 5;

/// Simple syntax highlighting for a line of Lua
fn highlight_lua_line(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Handle comments
        if c == '-' && i + 1 < chars.len() && chars[i + 1] == '-' {
            if !current_word.is_empty() {
                spans.push(Span::styled(
                    current_word.clone(),
                    word_style(&current_word),
                ));
                current_word.clear();
            }
            let byte_idx = line
                .char_indices()
                .nth(i)
                .map_or(line.len(), |(idx, _)| idx);
            spans.push(Span::styled(
                line[byte_idx..].to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            break;
        }

        // Handle strings (single or double quoted)
        if c == '"' || c == '\'' {
            if !current_word.is_empty() {
                spans.push(Span::styled(
                    current_word.clone(),
                    word_style(&current_word),
                ));
                current_word.clear();
            }
            let quote = c;
            let mut end = i + 1;
            while end < chars.len() && chars[end] != quote {
                if chars[end] == '\\' {
                    end += 2;
                } else {
                    end += 1;
                }
            }
            if end < chars.len() {
                end += 1;
            }
            let text: String = chars[i..end.min(chars.len())].iter().collect();
            spans.push(Span::styled(
                text,
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        // Handle non-alphanumeric (delimiters)
        if !c.is_alphanumeric() && c != '_' && c != '.' {
            if !current_word.is_empty() {
                spans.push(Span::styled(
                    current_word.clone(),
                    word_style(&current_word),
                ));
                current_word.clear();
            }

            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };

            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = word_style(&current_word);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn word_style(word: &str) -> Style {
    match word {
        "and" | "break" | "do" | "else" | "elseif" | "end" | "for" | "function" | "goto"
        | "if" | "in" | "local" | "not" | "or" | "repeat" | "return" | "then" | "until"
        | "while" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "nil" | "true" | "false" => Style::default().fg(DEFAULT_THEME.number),
        _ => {
            if word.starts_with(|c: char| c.is_ascii_digit()) {
                Style::default().fg(DEFAULT_THEME.number)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            }
        }
    }
}

/// Render the editor pane
#[allow(clippy::too_many_arguments)]
pub fn render_editor_pane(
    frame: &mut Frame,
    area: Rect,
    buffer: &EditorBuffer,
    breakpoints: &FxHashSet<usize>,
    debug_line: Option<usize>,
    open_entry: Option<&str>,
    is_focused: bool,
    scroll_row: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = match open_entry {
        Some(name) => format!(" Editor \u{2014} {name} "),
        None => String::from(" Editor "),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Follow the debug line while stepping, the cursor otherwise
    let follow = debug_line.unwrap_or(buffer.cursor_row);
    if follow < *scroll_row {
        *scroll_row = follow;
    } else if follow >= *scroll_row + visible_height {
        *scroll_row = follow + 1 - visible_height;
    }

    let visible_lines: Vec<Line> = buffer
        .lines()
        .iter()
        .enumerate()
        .skip(*scroll_row)
        .take(visible_height)
        .map(|(idx, text)| {
            let is_debug = debug_line == Some(idx);
            let has_breakpoint = breakpoints.contains(&idx);

            let marker = if has_breakpoint { "\u{25cf}" } else { " " };
            let num_style = if is_debug {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else if has_breakpoint {
                Style::default().fg(DEFAULT_THEME.breakpoint)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content_line = highlight_lua_line(text);
            if is_debug {
                for span in &mut content_line.spans {
                    span.style = span
                        .style
                        .patch(Style::default().bg(DEFAULT_THEME.current_line_bg));
                }
            }

            let mut final_spans = vec![
                Span::styled(
                    marker.to_string(),
                    Style::default().fg(DEFAULT_THEME.breakpoint),
                ),
                Span::styled(format!("{:3} ", idx + 1), num_style),
            ];
            final_spans.extend(content_line.spans);

            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);

    // Hardware cursor only while editing (not stepping)
    if is_focused && debug_line.is_none() {
        let row = buffer.cursor_row;
        if row >= *scroll_row && row < *scroll_row + visible_height {
            let x = area.x + 1 + GUTTER_WIDTH + buffer.cursor_col as u16;
            let y = area.y + 1 + (row - *scroll_row) as u16;
            if x + 1 < area.x + area.width {
                frame.set_cursor_position((x, y));
            }
        }
    }
}
