//! Status bar rendering with keybindings and state indicators

use crate::ui::app::FocusedPane;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// `debug` is `Some((position, total))` while a debug session is active.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    debug: Option<(usize, usize)>,
    is_playing: bool,
    focused: FocusedPane,
    modal_active: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Left side: mode chip and status message
    let mode_text = match debug {
        Some((position, total)) => format!(" DEBUG {position}/{total} "),
        None => String::from(" EDIT "),
    };
    let mode_bg = if debug.is_some() {
        DEFAULT_THEME.secondary
    } else {
        DEFAULT_THEME.primary
    };

    let left_spans = vec![
        Span::styled(
            mode_text,
            Style::default()
                .bg(mode_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {message} "),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds for the current state
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let hints: &[(&str, &str)] = if modal_active {
        &[("\u{21b5}", "confirm"), ("esc", "cancel")]
    } else if debug.is_some() {
        &[
            ("\u{2192}", "step"),
            ("\u{2395}", "play"),
            ("^b", "bkpt"),
            ("esc", "stop"),
        ]
    } else {
        match focused {
            FocusedPane::Editor => &[
                ("^r", "run"),
                ("^s", "save"),
                ("^d", "debug"),
                ("^b", "bkpt"),
                ("^q", "quit"),
            ],
            FocusedPane::Library => &[
                ("\u{21b5}", "load"),
                ("d", "delete"),
                ("n", "folder"),
                ("r", "refresh"),
                ("s", "share"),
            ],
            FocusedPane::Output => &[("\u{2191}/\u{2193}", "scroll"), ("tab", "focus")],
        }
    };

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("\u{2502}", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(format!(" {key} "), key_style));
        right_spans.push(Span::styled(format!(" {desc} "), desc_style));
    }

    if is_playing {
        right_spans.push(Span::styled("\u{2502}", sep_style));
        right_spans.push(Span::styled(
            " \u{25b6} PLAYING ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
