// src/ui/tui.rs
//! Terminal setup, drawing and the event loop.

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, widgets::ListState, Frame, Terminal};

use crate::{
    app::{LaunchRequest, Navigator, RowDisplay, Screen, ScreenResult},
    config::ChooserConfig,
    fs::tail_path,
    ui::{
        keybindings::key_to_action,
        layout::compute_layout,
        widgets::{render_file_list, render_menu_bar, render_path_header},
    },
};

/// Draw `screen` into the frame.
pub fn draw(f: &mut Frame<'_>, screen: &Screen, list_state: &mut ListState) {
    let layout = compute_layout(f.area());

    render_path_header(f, layout.header, &screen.header(), screen.mode());

    let rows: Vec<RowDisplay> = screen.adapter().rows().collect();
    list_state.select(if rows.is_empty() {
        None
    } else {
        Some(screen.selected())
    });
    let title = tail_path(screen.current_dir(), 2);
    render_file_list(f, layout.list, &title, &rows, list_state);

    render_menu_bar(f, layout.menu, screen.menu());
}

/// Dispatch key presses until the root screen finishes.
fn event_loop<B: Backend>(terminal: &mut Terminal<B>, nav: &mut Navigator) -> Result<ScreenResult> {
    let mut list_state = ListState::default();
    let mut depth = nav.depth();

    loop {
        if let Some(screen) = nav.current() {
            terminal.draw(|f| draw(f, screen, &mut list_state))?;
        }

        let CEvent::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(command) = key_to_action(&key).command() else {
            continue;
        };
        if let Some(result) = nav.dispatch(command)? {
            return Ok(result);
        }

        // A different screen is on top; start its scroll position fresh.
        if nav.depth() != depth {
            depth = nav.depth();
            list_state = ListState::default();
        }
    }
}

/// Run the picker in the terminal and return the caller's result.
pub fn run(request: LaunchRequest, config: ChooserConfig) -> Result<ScreenResult> {
    let mut nav = Navigator::launch(request, config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, &mut nav);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}
