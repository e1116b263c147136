// src/ui/layout.rs
//! Layout computation for the picker screen.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed layout areas for rendering.
#[derive(Debug, Clone, Copy)]
pub struct ComputedLayout {
    /// Current directory path
    pub header: Rect,
    /// Entry list
    pub list: Rect,
    /// Menu actions and key hints
    pub menu: Rect,
}

/// Split the screen into path header, entry list and menu bar.
pub fn compute_layout(area: Rect) -> ComputedLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    ComputedLayout {
        header: chunks[0],
        list: chunks[1],
        menu: chunks[2],
    }
}
