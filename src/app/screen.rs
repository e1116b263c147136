// src/app/screen.rs
//! One picker screen: lists a directory, reacts to rows and menu actions, and
//! relays results coming back from the child screens it launched.

use std::path::{Path, PathBuf};

use crate::{config::ChooserConfig, error::Result, fs::build_listing};

use super::{
    adapter::FileAdapter,
    extras::SELECT_FILE_REQUEST_CODE,
    handler::{on_activate, Activation},
    launch::{LaunchRequest, SelectionMode},
    outcome::{NavigationOutcome, ScreenResult},
};

/// Lifecycle of a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Initializing,
    /// Listing bound and shown; waiting for input.
    Listed,
    /// Suspended below a child screen.
    Navigating,
    /// Finished with a result.
    Completing,
}

/// Option menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Confirm the displayed directory.
    Select,
    Cancel,
    /// Step back one level.
    Up,
}

impl MenuAction {
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Select => "Select",
            MenuAction::Cancel => "Cancel",
            MenuAction::Up => "Up",
        }
    }
}

const DIRECTORY_MENU: &[MenuAction] = &[MenuAction::Select, MenuAction::Cancel, MenuAction::Up];
const FILE_MENU: &[MenuAction] = &[MenuAction::Up];

/// What the owner of the screen stack must do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Stay,
    /// Push a child screen; its result comes back under `request_code`.
    Launch {
        request_code: i32,
        request: LaunchRequest,
    },
    /// Pop this screen and deliver `result` to its launcher.
    Finish(ScreenResult),
}

/// Picker session owned by one screen.
#[derive(Debug)]
pub struct Screen {
    current_dir: PathBuf,
    mode: SelectionMode,
    adapter: FileAdapter,
    selected: usize,
    state: ScreenState,
    result: ScreenResult,
}

impl Screen {
    /// Read the launch parameters and bind the first listing.
    pub fn create(request: &LaunchRequest, config: &ChooserConfig) -> Self {
        let start = request
            .start_path()
            .unwrap_or_else(|| config.default_start.clone());
        let current_dir = std::path::absolute(&start).unwrap_or(start);

        let mut screen = Self {
            current_dir,
            mode: request.mode(),
            adapter: FileAdapter::new(),
            selected: 0,
            state: ScreenState::Initializing,
            // A screen dismissed without a decision reports a step back.
            result: NavigationOutcome::Back.into(),
        };
        screen.list();
        screen
    }

    /// Rebuild the listing of the current directory.
    pub fn list(&mut self) {
        let listing = build_listing(&self.current_dir, self.mode.includes_files());
        self.adapter.set_files(listing);
        self.selected = self.selected.min(self.adapter.files().len().saturating_sub(1));
        self.state = ScreenState::Listed;
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn adapter(&self) -> &FileAdapter {
        &self.adapter
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Result the launcher will receive if the screen is dismissed now.
    pub fn pending_result(&self) -> &ScreenResult {
        &self.result
    }

    /// Header line: the absolute path of the displayed directory.
    pub fn header(&self) -> String {
        self.current_dir.display().to_string()
    }

    pub fn menu(&self) -> &'static [MenuAction] {
        match self.mode {
            SelectionMode::Directory => DIRECTORY_MENU,
            SelectionMode::File => FILE_MENU,
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.adapter.files().len() {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Activate the row under the cursor. No-op on an empty listing.
    pub fn activate_selected(&mut self) -> Result<Transition> {
        if self.adapter.files().is_empty() {
            return Ok(Transition::Stay);
        }
        self.activate(self.selected)
    }

    pub fn activate(&mut self, row: usize) -> Result<Transition> {
        match on_activate(&self.adapter, row, self.mode)? {
            Activation::Navigate(request) => {
                log::debug!("descending into {:?}", request.start_path());
                self.state = ScreenState::Navigating;
                Ok(Transition::Launch {
                    request_code: SELECT_FILE_REQUEST_CODE,
                    request,
                })
            }
            Activation::Complete(outcome) => Ok(self.finish(outcome)),
        }
    }

    /// Run a menu action. Actions missing from this mode's menu are ignored.
    pub fn on_menu(&mut self, action: MenuAction) -> Transition {
        if !self.menu().contains(&action) {
            log::debug!("{} is not offered in {:?} mode", action.label(), self.mode);
            return Transition::Stay;
        }
        match action {
            MenuAction::Select => {
                let dir = self.current_dir.clone();
                self.finish(NavigationOutcome::Selected(dir))
            }
            MenuAction::Cancel => self.finish(NavigationOutcome::Cancelled),
            MenuAction::Up => self.finish(NavigationOutcome::Back),
        }
    }

    /// Give up on the whole chain regardless of mode.
    pub fn abort(&mut self) -> Transition {
        self.finish(NavigationOutcome::Cancelled)
    }

    /// Handle the result of a child screen launched by this one.
    pub fn on_child_result(&mut self, request_code: i32, result: &ScreenResult) -> Transition {
        if request_code != SELECT_FILE_REQUEST_CODE {
            return Transition::Stay;
        }
        match NavigationOutcome::from_result(result) {
            Some(NavigationOutcome::Selected(path)) => {
                self.finish(NavigationOutcome::Selected(path))
            }
            Some(NavigationOutcome::Cancelled) => self.finish(NavigationOutcome::Cancelled),
            Some(NavigationOutcome::Back) | None => {
                self.state = ScreenState::Listed;
                Transition::Stay
            }
        }
    }

    fn finish(&mut self, outcome: NavigationOutcome) -> Transition {
        log::debug!("{} finishing with {:?}", self.current_dir.display(), outcome);
        self.state = ScreenState::Completing;
        self.result = outcome.into();
        Transition::Finish(self.result.clone())
    }
}
