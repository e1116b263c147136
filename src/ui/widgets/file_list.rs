// src/ui/widgets/file_list.rs
//! Directory entry list widget.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::app::RowDisplay;
use crate::ui::icons::icon_glyph;

/// Render the entry list with the cursor row highlighted.
pub fn render_file_list(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    rows: &[RowDisplay],
    state: &mut ListState,
) {
    let items: Vec<ListItem> = if rows.is_empty() {
        vec![ListItem::new("(empty)").style(Style::default().add_modifier(Modifier::DIM))]
    } else {
        rows.iter()
            .map(|row| ListItem::new(format!("{} {}", icon_glyph(row.icon), row.label)))
            .collect()
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}
