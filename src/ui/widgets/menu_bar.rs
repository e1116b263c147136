// src/ui/widgets/menu_bar.rs
//! One-line bar listing the screen's menu actions.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::MenuAction;
use crate::ui::keybindings::menu_key;

/// Spans for `menu`, followed by the quit hint.
pub fn menu_line(menu: &[MenuAction]) -> Line<'static> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut spans = Vec::new();
    for action in menu {
        spans.push(Span::styled(format!("[{}]", menu_key(*action)), bold));
        spans.push(Span::raw(format!(" {}  ", action.label())));
    }
    spans.push(Span::styled("[q]", bold));
    spans.push(Span::raw(" Quit"));
    Line::from(spans)
}

pub fn render_menu_bar(f: &mut Frame<'_>, area: Rect, menu: &[MenuAction]) {
    f.render_widget(Paragraph::new(menu_line(menu)), area);
}
