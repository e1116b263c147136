// src/app/navigator.rs
//! Stack of picker screens implementing launch-for-result.
//!
//! Launching a child pushes it above its parent; a finished screen is popped
//! and its result is delivered to the screen below it, which may finish in
//! turn. The caller gets exactly one result, when the last screen finishes.

use crate::{
    config::ChooserConfig,
    error::{ChooserError, Result},
};

use super::{
    launch::LaunchRequest,
    outcome::ScreenResult,
    screen::{MenuAction, Screen, Transition},
};

/// User input routed to the top screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    Activate(usize),
    ActivateSelected,
    Menu(MenuAction),
    /// Abandon the whole chain.
    Quit,
}

#[derive(Debug)]
struct Frame {
    screen: Screen,
    /// Code the parent launched this screen with; `None` for the root.
    request_code: Option<i32>,
}

/// Owns every live screen.
#[derive(Debug)]
pub struct Navigator {
    config: ChooserConfig,
    stack: Vec<Frame>,
}

impl Navigator {
    /// Open the root screen.
    pub fn launch(request: LaunchRequest, config: ChooserConfig) -> Self {
        let screen = Screen::create(&request, &config);
        log::info!(
            "picker opened at {} in {:?} mode",
            screen.header(),
            screen.mode()
        );
        Self {
            config,
            stack: vec![Frame {
                screen,
                request_code: None,
            }],
        }
    }

    /// Screen currently shown.
    pub fn current(&self) -> Option<&Screen> {
        self.stack.last().map(|f| &f.screen)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_finished(&self) -> bool {
        self.stack.is_empty()
    }

    /// Apply `command` to the top screen. Returns the caller's result once the
    /// root screen has finished.
    pub fn dispatch(&mut self, command: Command) -> Result<Option<ScreenResult>> {
        let screen = &mut self
            .stack
            .last_mut()
            .ok_or(ChooserError::NoActiveScreen)?
            .screen;

        let transition = match command {
            Command::MoveUp => {
                screen.move_up();
                Transition::Stay
            }
            Command::MoveDown => {
                screen.move_down();
                Transition::Stay
            }
            Command::Activate(row) => screen.activate(row)?,
            Command::ActivateSelected => screen.activate_selected()?,
            Command::Menu(action) => screen.on_menu(action),
            Command::Quit => screen.abort(),
        };
        Ok(self.apply(transition))
    }

    fn apply(&mut self, mut transition: Transition) -> Option<ScreenResult> {
        loop {
            match transition {
                Transition::Stay => return None,
                Transition::Launch {
                    request_code,
                    request,
                } => {
                    let screen = Screen::create(&request, &self.config);
                    log::debug!("pushed {} at depth {}", screen.header(), self.stack.len() + 1);
                    self.stack.push(Frame {
                        screen,
                        request_code: Some(request_code),
                    });
                    return None;
                }
                Transition::Finish(result) => {
                    let frame = self.stack.pop()?;
                    let (Some(request_code), Some(parent)) =
                        (frame.request_code, self.stack.last_mut())
                    else {
                        log::info!("picker finished with {:?}", result.code);
                        return Some(result);
                    };
                    transition = parent.screen.on_child_result(request_code, &result);
                }
            }
        }
    }
}
