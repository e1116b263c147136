// src/ui/widgets/mod.rs
//! Widgets of the picker screen.

pub mod file_list;
pub mod menu_bar;
pub mod path_header;

// Re-export widget rendering functions
pub use file_list::render_file_list;
pub use menu_bar::render_menu_bar;
pub use path_header::render_path_header;
