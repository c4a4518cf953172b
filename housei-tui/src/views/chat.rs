//! Chat panel: transcript and composer.

use crate::state::{App, InputFocus};
use crate::theme::message_status_color;
use crate::views::helpers::{agent_ref, panel};
use housei_core::{Message, MessageRole};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let lines: Vec<Line> = app
        .chat
        .transcript
        .iter()
        .flat_map(|message| message_lines(app, message))
        .collect();
    // Keep the newest messages in view, counting wrapped rows.
    let height = chunks[0].height.saturating_sub(2) as usize;
    let rows = wrapped_rows(&lines, chunks[0].width.saturating_sub(2));
    let offset = u16::try_from(rows.saturating_sub(height)).unwrap_or(u16::MAX);
    let transcript = Paragraph::new(lines)
        .block(panel("Chat", &app.theme, false))
        .wrap(Wrap { trim: true })
        .scroll((offset, 0));
    f.render_widget(transcript, chunks[0]);

    let focused = app.focus == InputFocus::Chat;
    let mut composer = app.chat.composer.clone();
    composer.set_block(panel(
        if focused { "Message (Enter send, Esc leave)" } else { "Message [c]" },
        &app.theme,
        focused,
    ));
    composer.set_cursor_line_style(Style::default());
    f.render_widget(&composer, chunks[1]);
}

fn message_lines(app: &App, message: &Message) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let sender = match message.role {
        MessageRole::Agent => agent_ref(&message.sender, &app.catalog, theme),
        MessageRole::User => Span::styled(
            message.sender.clone(),
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        ),
        MessageRole::System => Span::styled(message.sender.clone(), Style::default().fg(theme.text_dim)),
    };
    vec![
        Line::from(vec![
            sender,
            Span::styled(format!("  {}  ", message.timestamp), Style::default().fg(theme.text_dim)),
            Span::styled(
                message.status.to_string(),
                Style::default().fg(message_status_color(message.status, theme)),
            ),
        ]),
        Line::from(Span::styled(message.content.clone(), Style::default().fg(theme.text))),
        Line::raw(""),
    ]
}

/// Rows the lines occupy once wrapped to `width` columns.
fn wrapped_rows(lines: &[Line<'_>], width: u16) -> usize {
    let width = usize::from(width.max(1));
    lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum()
}
