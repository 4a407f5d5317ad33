//! Library pane rendering: the snippet/folder tree

use crate::ui::app::TreeRow;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the file/folder tree with per-entry selection
pub fn render_library_pane(
    frame: &mut Frame,
    area: Rect,
    rows: &[TreeRow],
    selected: usize,
    open_entry: Option<&str>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Library ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if rows.is_empty() {
        let paragraph = Paragraph::new("(no snippets saved)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Keep the selected row visible
    if selected < *scroll_offset {
        *scroll_offset = selected;
    } else if selected >= *scroll_offset + visible_height {
        *scroll_offset = selected + 1 - visible_height;
    }

    let visible_lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, row)| {
            let mut spans = match row {
                TreeRow::Folder { name, open, count } => vec![
                    Span::styled(
                        format!("{} {name}", if *open { "\u{25be}" } else { "\u{25b8}" }),
                        Style::default()
                            .fg(DEFAULT_THEME.folder)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" ({count})"),
                        Style::default().fg(DEFAULT_THEME.comment),
                    ),
                ],
                TreeRow::Snippet { name, indented } => {
                    let indent = if *indented { "  " } else { "" };
                    let mut spans = vec![Span::styled(
                        format!("{indent}{name}"),
                        Style::default().fg(DEFAULT_THEME.fg),
                    )];
                    if open_entry == Some(name.as_str()) {
                        spans.push(Span::styled(
                            " \u{25cf}",
                            Style::default().fg(DEFAULT_THEME.primary),
                        ));
                    }
                    spans
                }
            };

            if idx == selected && is_focused {
                for span in &mut spans {
                    span.style = span
                        .style
                        .patch(Style::default().bg(DEFAULT_THEME.current_line_bg));
                }
            }

            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
