// src/ui/icons.rs
//! Icon glyphs for list rows.

use crate::{app::IconKind, fs::FileCategory};

/// Nerd-font glyph for a row icon.
pub fn icon_glyph(icon: IconKind) -> &'static str {
    match icon {
        IconKind::Folder => "\u{f07b}",
        IconKind::File(FileCategory::Audio) => "\u{f1c7}",
        IconKind::File(FileCategory::Image) => "\u{f1c5}",
        IconKind::File(FileCategory::Video) => "\u{f1c8}",
        IconKind::File(FileCategory::Document) => "\u{f15c}",
        IconKind::File(FileCategory::Binary) => "\u{f1c6}",
    }
}
