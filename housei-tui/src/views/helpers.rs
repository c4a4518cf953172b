//! Common view rendering helpers.

use crate::theme::BlueprintTheme;
use housei_core::EntityCatalog;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
};

/// Rectangle of `percent_x` by `percent_y` centred in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Split `area` into a left column of `left_percent` and the remainder.
pub fn two_column(area: Rect, left_percent: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(left_percent),
            Constraint::Percentage(100 - left_percent),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

pub fn panel<'a>(title: impl Into<String>, theme: &BlueprintTheme, focused: bool) -> Block<'a> {
    let border = if focused { theme.border_focus } else { theme.border };
    Block::default()
        .title(Span::styled(title.into(), Style::default().fg(theme.primary)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

/// An agent name as referenced from another record. Names with no matching
/// agent render as-is, dimmed and marked.
pub fn agent_ref(name: &str, catalog: &EntityCatalog, theme: &BlueprintTheme) -> Span<'static> {
    if catalog.agent_by_name(name).is_some() {
        Span::styled(name.to_string(), Style::default().fg(theme.secondary))
    } else {
        Span::styled(
            format!("{name}?"),
            Style::default()
                .fg(theme.text_dim)
                .add_modifier(Modifier::ITALIC),
        )
    }
}

pub fn money(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let whole = amount.abs().round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::new();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}")
}
