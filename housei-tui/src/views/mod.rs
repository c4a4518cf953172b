//! View rendering dispatch.

pub mod cards;
pub mod chat;
pub mod code;
pub mod helpers;
pub mod modals;
pub mod sidebar;
pub mod timeline;

use crate::nav::{MainView, MobilePane};
use crate::state::{App, InputFocus};
use crate::views::helpers::panel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);
    render_body(f, app, layout[1]);
    render_footer(f, app, layout[2]);

    modals::render(f, app);
}

fn render_body(f: &mut Frame<'_>, app: &App, area: Rect) {
    if app.router.is_fullscreen() {
        code::render(f, app, area);
        return;
    }

    if app.layout.is_mobile() {
        match app.router.mobile {
            MobilePane::Chat => chat::render(f, app, area),
            MobilePane::Workspace => render_main(f, app, area),
        }
        return;
    }

    let mut constraints = Vec::with_capacity(3);
    if !app.layout.sidebar_collapsed() {
        constraints.push(Constraint::Length(26));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Percentage(30));
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let (main, chat) = if app.layout.sidebar_collapsed() {
        (columns[0], columns[1])
    } else {
        sidebar::render(f, app, columns[0]);
        (columns[1], columns[2])
    };
    render_main(f, app, main);
    chat::render(f, app, chat);
}

fn render_main(f: &mut Frame<'_>, app: &App, area: Rect) {
    match app.router.main {
        MainView::Cards => cards::render(f, app, area),
        MainView::Code => code::render(f, app, area),
        MainView::Timeline => timeline::render(f, app, area),
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut spans = vec![Span::styled(
        "HOUSEI ",
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
    )];
    for view in MainView::all() {
        let style = if *view == app.router.main {
            Style::default().fg(theme.bg).bg(theme.primary)
        } else {
            Style::default().fg(theme.text_dim)
        };
        spans.push(Span::styled(format!(" {} {} ", view.index() + 1, view.title()), style));
    }

    let viewport = if app.layout.is_mobile() {
        format!("  mobile • {} pane [m]", match app.router.mobile {
            MobilePane::Chat => "chat",
            MobilePane::Workspace => "workspace",
        })
    } else if app.layout.sidebar_collapsed() {
        "  sidebar hidden [b]".to_string()
    } else {
        "  desktop".to_string()
    };
    spans.push(Span::styled(viewport, Style::default().fg(theme.text_dim)));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(header, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    if let Some(palette) = &app.command_palette {
        let mut input = palette.clone();
        input.set_block(panel(
            "Open modal by name (Enter open, Esc cancel)",
            &app.theme,
            app.focus == InputFocus::Command,
        ));
        input.set_cursor_line_style(Style::default());
        f.render_widget(&input, area);
        return;
    }

    let help = "Tab/1-3 view • j/k move • Enter open • f filter • s sort • c chat • : command • x close • q quit";
    let (text, style) = if let Some(note) = app.notifications.last() {
        let color = match note.level {
            crate::notifications::NotificationLevel::Info => app.theme.info,
            crate::notifications::NotificationLevel::Warning => app.theme.warning,
            crate::notifications::NotificationLevel::Error => app.theme.error,
            crate::notifications::NotificationLevel::Success => app.theme.success,
        };
        (format!("{}: {}", note.label(), note.message), Style::default().fg(color))
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .style(style);
    f.render_widget(footer, area);
}
