//! Navigation sidebar: main views and modal shortcuts.

use crate::keys::hotkey_for;
use crate::modal::ModalName;
use crate::nav::MainView;
use crate::state::App;
use crate::views::helpers::panel;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut lines: Vec<Line> = MainView::all()
        .iter()
        .map(|view| {
            let active = *view == app.router.main;
            let style = if active {
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            Line::from(Span::styled(
                format!("{} {} {}", if active { "▶" } else { " " }, view.index() + 1, view.title()),
                style,
            ))
        })
        .collect();

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Tools",
        Style::default().fg(theme.text_dim),
    )));
    for modal in ModalName::all() {
        let Some(key) = hotkey_for(*modal) else {
            continue;
        };
        let style = if app.modals.is_open(*modal) {
            Style::default().fg(theme.tertiary)
        } else {
            Style::default().fg(theme.text_dim)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {key} "), Style::default().fg(theme.secondary)),
            Span::styled(modal.title(), style),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(panel("HOUSEI", theme, false)), area);
}
