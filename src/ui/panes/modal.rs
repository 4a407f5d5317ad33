//! Modal prompt and notice dialogs.
//!
//! While a modal is up it consumes all keys; rendering happens last so the
//! dialog floats above the panes.

use crate::ui::app::{Modal, PromptKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Centered popup rectangle, clamped to the frame.
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the active modal dialog
pub fn render_modal(frame: &mut Frame, area: Rect, modal: &Modal) {
    match modal {
        Modal::Prompt { kind, input } => {
            let (title, hint) = match kind {
                PromptKind::SaveSnippet => (
                    " Save snippet ",
                    "name, or folder/name to save into a folder",
                ),
                PromptKind::NewFolder => (" New folder ", "folder names must be unique"),
            };

            let popup = popup_area(area, 52, 4);
            frame.render_widget(Clear, popup);

            let block = Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(
                    Style::default()
                        .fg(DEFAULT_THEME.border_focused)
                        .add_modifier(Modifier::BOLD),
                );

            let lines = vec![
                Line::styled(input.clone(), Style::default().fg(DEFAULT_THEME.fg)),
                Line::styled(hint, Style::default().fg(DEFAULT_THEME.comment)),
            ];
            frame.render_widget(Paragraph::new(lines).block(block), popup);

            let cursor_x = popup.x + 1 + input.chars().count() as u16;
            if cursor_x + 1 < popup.x + popup.width {
                frame.set_cursor_position((cursor_x, popup.y + 1));
            }
        }
        Modal::Notice { message } => {
            let popup = popup_area(area, 52, 5);
            frame.render_widget(Clear, popup);

            let block = Block::default()
                .title(" Notice ")
                .borders(Borders::ALL)
                .border_style(
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                );

            let lines = vec![
                Line::styled(message.clone(), Style::default().fg(DEFAULT_THEME.fg)),
                Line::raw(""),
                Line::styled(
                    "press Enter to dismiss",
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ];
            frame.render_widget(
                Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
                popup,
            );
        }
    }
}
