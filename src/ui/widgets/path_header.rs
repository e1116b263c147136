// src/ui/widgets/path_header.rs
//! Header showing the directory being browsed.

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::SelectionMode;

pub fn render_path_header(f: &mut Frame<'_>, area: Rect, path: &str, mode: SelectionMode) {
    let title = match mode {
        SelectionMode::File => "Select a file",
        SelectionMode::Directory => "Select a directory",
    };
    let header = Paragraph::new(path.to_string())
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(header, area);
}
