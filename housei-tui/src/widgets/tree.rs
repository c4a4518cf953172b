//! Collapsible tree used by the timeline view.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

#[derive(Debug, Clone)]
pub struct TreeItem {
    pub id: String,
    pub label: String,
    /// Right-aligned suffix such as a progress figure.
    pub detail: String,
    pub depth: usize,
    pub expanded: bool,
    pub has_children: bool,
    pub style: Style,
}

#[derive(Debug, Clone)]
pub struct TreeStyle {
    pub normal: Style,
    pub selected: Style,
    pub detail: Style,
}

impl TreeStyle {
    pub fn new(normal: Style, selected: Style, detail: Style) -> Self {
        Self {
            normal,
            selected,
            detail,
        }
    }
}

pub struct TreeWidget<'a> {
    pub title: &'a str,
    pub items: &'a [TreeItem],
    pub selected: Option<usize>,
    pub style: TreeStyle,
}

impl<'a> TreeWidget<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| {
                let indent = "  ".repeat(item.depth);
                let marker = match (item.has_children, item.expanded) {
                    (true, true) => "▾ ",
                    (true, false) => "▸ ",
                    (false, _) => "  ",
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{indent}{marker}"), self.style.normal),
                    Span::styled(item.label.clone(), item.style),
                    Span::styled(format!("  {}", item.detail), self.style.detail),
                ]))
            })
            .collect();

        let list = List::new(rows)
            .block(Block::default().title(self.title).borders(Borders::ALL))
            .highlight_style(self.style.selected);

        let mut state = ListState::default();
        state.select(self.selected);
        f.render_stateful_widget(list, area, &mut state);
    }
}
