//! End-to-end checks of the launch-for-result chain across nested screens.

use std::fs::{self, File};
use std::path::Path;

use filechooser::app::{
    Command, LaunchRequest, MenuAction, NavigationOutcome, Navigator, ResultCode, ScreenState,
    SelectionMode,
};
use filechooser::config::ChooserConfig;
use tempfile::TempDir;

/// root/
///   a/
///     deep/
///       leaf.txt
///     doc.txt
///   b/
///   f.txt
fn setup_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("b")).unwrap();
    fs::create_dir_all(root.join("a").join("deep")).unwrap();
    File::create(root.join("f.txt")).unwrap();
    File::create(root.join("a").join("doc.txt")).unwrap();
    File::create(root.join("a").join("deep").join("leaf.txt")).unwrap();
    dir
}

fn launch(root: &Path, mode: SelectionMode) -> Navigator {
    let request = LaunchRequest::new().with_path(root).with_mode(mode);
    Navigator::launch(request, ChooserConfig::new("/"))
}

fn row_of(nav: &Navigator, name: &str) -> usize {
    nav.current()
        .unwrap()
        .adapter()
        .files()
        .iter()
        .position(|e| e.name() == name)
        .unwrap_or_else(|| panic!("{name} not listed"))
}

fn open(nav: &mut Navigator, name: &str) {
    let row = row_of(nav, name);
    assert_eq!(nav.dispatch(Command::Activate(row)).unwrap(), None);
}

#[test]
fn directory_mode_select_at_root() {
    let dir = setup_tree();
    let mut nav = launch(dir.path(), SelectionMode::Directory);

    let names: Vec<String> = nav
        .current()
        .unwrap()
        .adapter()
        .files()
        .iter()
        .map(|e| e.name())
        .collect();
    assert_eq!(names, vec!["a", "b"]);

    let result = nav
        .dispatch(Command::Menu(MenuAction::Select))
        .unwrap()
        .unwrap();
    assert_eq!(result.code, ResultCode::Ok);
    assert_eq!(result.selected_path(), Some(dir.path().to_path_buf()));
}

#[test]
fn child_screen_inherits_path_and_mode() {
    let dir = setup_tree();
    let mut nav = launch(dir.path(), SelectionMode::Directory);
    open(&mut nav, "a");

    assert_eq!(nav.depth(), 2);
    let child = nav.current().unwrap();
    assert_eq!(child.current_dir(), dir.path().join("a"));
    assert_eq!(child.mode(), SelectionMode::Directory);
}

#[test]
fn file_selected_at_root_needs_no_child() {
    let dir = setup_tree();
    let mut nav = launch(dir.path(), SelectionMode::File);

    let row = row_of(&nav, "f.txt");
    let result = nav.dispatch(Command::Activate(row)).unwrap().unwrap();
    assert_eq!(result.selected_path(), Some(dir.path().join("f.txt")));
    assert!(nav.is_finished());
}

#[test]
fn nested_file_selection_reaches_the_caller() {
    let dir = setup_tree();
    let mut nav = launch(dir.path(), SelectionMode::File);
    open(&mut nav, "a");

    let row = row_of(&nav, "doc.txt");
    let result = nav.dispatch(Command::Activate(row)).unwrap().unwrap();

    assert_eq!(
        NavigationOutcome::from_result(&result),
        Some(NavigationOutcome::Selected(dir.path().join("a").join("doc.txt")))
    );
    assert!(nav.is_finished());
}

#[test]
fn grandchild_selection_passes_through_every_ancestor() {
    let dir = setup_tree();
    let mut nav = launch(dir.path(), SelectionMode::File);
    open(&mut nav, "a");
    open(&mut nav, "deep");
    assert_eq!(nav.depth(), 3);

    let row = row_of(&nav, "leaf.txt");
    let result = nav.dispatch(Command::Activate(row)).unwrap().unwrap();
    assert_eq!(
        result.selected_path(),
        Some(dir.path().join("a").join("deep").join("leaf.txt"))
    );
    assert!(nav.is_finished());
}

#[test]
fn directory_confirmed_deep_in_the_chain() {
    let dir = setup_tree();
    let mut nav = launch(dir.path(), SelectionMode::Directory);
    open(&mut nav, "a");
    open(&mut nav, "deep");

    let result = nav
        .dispatch(Command::Menu(MenuAction::Select))
        .unwrap()
        .unwrap();
    assert_eq!(result.selected_path(), Some(dir.path().join("a").join("deep")));
}

#[test]
fn cancel_deep_in_the_chain_unwinds_to_the_caller() {
    let dir = setup_tree();
    let mut nav = launch(dir.path(), SelectionMode::Directory);
    open(&mut nav, "a");
    open(&mut nav, "deep");

    let result = nav
        .dispatch(Command::Menu(MenuAction::Cancel))
        .unwrap()
        .unwrap();
    assert_eq!(result.code, ResultCode::Canceled);
    assert_eq!(result.data, None);
    assert!(nav.is_finished());
}

#[test]
fn back_then_select_uses_the_parent_directory() {
    let dir = setup_tree();
    let mut nav = launch(dir.path(), SelectionMode::Directory);
    open(&mut nav, "a");
    open(&mut nav, "deep");

    assert_eq!(nav.dispatch(Command::Menu(MenuAction::Up)).unwrap(), None);
    assert_eq!(nav.depth(), 2);
    assert_eq!(nav.current().unwrap().state(), ScreenState::Listed);

    let result = nav
        .dispatch(Command::Menu(MenuAction::Select))
        .unwrap()
        .unwrap();
    assert_eq!(result.selected_path(), Some(dir.path().join("a")));
}

#[cfg(unix)]
#[test]
fn non_utf8_names_survive_the_round_trip() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new().unwrap();
    let name = OsStr::from_bytes(b"caf\xe9");
    let child_dir = dir.path().join(name);
    // Some filesystems refuse names that are not UTF-8.
    if fs::create_dir(&child_dir).is_err() {
        return;
    }
    let leaf = child_dir.join(name);
    File::create(&leaf).unwrap();

    let mut nav = launch(dir.path(), SelectionMode::File);
    assert_eq!(nav.dispatch(Command::Activate(0)).unwrap(), None);

    let child = nav.current().unwrap();
    assert_eq!(child.current_dir(), child_dir);
    assert_eq!(child.adapter().files().len(), 1);

    let result = nav.dispatch(Command::Activate(0)).unwrap().unwrap();
    assert_eq!(result.selected_path(), Some(leaf));
}
