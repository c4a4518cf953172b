//! Code view: highlighted source documents with a fullscreen mode.

use crate::state::App;
use crate::views::helpers::panel;
use crate::widgets::SyntaxHighlighter;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = &app.theme;
    let documents = app.catalog.code_documents();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let tabs: Vec<Span> = documents
        .iter()
        .enumerate()
        .map(|(idx, doc)| {
            let style = if idx == app.code_view.document {
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_dim)
            };
            Span::styled(format!(" {} ", doc.file_name), style)
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(tabs)), chunks[0]);

    let hint = if app.router.is_fullscreen() {
        "[Esc] exit fullscreen"
    } else {
        "[F] fullscreen  [Enter] next file"
    };
    let Some(doc) = documents.get(app.code_view.document) else {
        let empty = Paragraph::new("No documents loaded").block(panel("Code", theme, false));
        f.render_widget(empty, chunks[1]);
        return;
    };

    let highlighter = SyntaxHighlighter {
        keyword_color: theme.secondary,
        type_color: theme.info,
        string_color: theme.success,
        number_color: theme.tertiary,
        comment_color: theme.text_dim,
        gutter_color: theme.border,
    };
    let title = format!("{} ({})  {}", doc.file_name, doc.language, hint);
    let paragraph = Paragraph::new(highlighter.highlight(&doc.content))
        .block(panel(title, theme, app.router.is_fullscreen()))
        .scroll((app.code_view.scroll, 0));
    f.render_widget(paragraph, chunks[1]);
}
