// src/fs/detection.rs
//! File category guessing from the file name.
//!
//! Only the extension is consulted; file contents are never opened.

use std::path::Path;

use mime_guess::MimeGuess;

/// High-level file categories.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FileCategory {
    Image,
    Audio,
    Video,
    Document,
    Binary,
}

/// Guess the category of `path` from its extension.
pub fn guess_category(path: &Path) -> FileCategory {
    let Some(mime) = MimeGuess::from_path(path).first() else {
        return FileCategory::Binary;
    };

    match mime.type_().as_str() {
        "image" => FileCategory::Image,
        "audio" => FileCategory::Audio,
        "video" => FileCategory::Video,
        "text" => FileCategory::Document,
        "application" if mime.subtype().as_str() != "octet-stream" => FileCategory::Document,
        _ => FileCategory::Binary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_follow_extension() {
        assert_eq!(guess_category(Path::new("a.png")), FileCategory::Image);
        assert_eq!(guess_category(Path::new("a.mp3")), FileCategory::Audio);
        assert_eq!(guess_category(Path::new("a.mp4")), FileCategory::Video);
        assert_eq!(guess_category(Path::new("a.txt")), FileCategory::Document);
        assert_eq!(guess_category(Path::new("a.pdf")), FileCategory::Document);
    }

    #[test]
    fn unknown_extension_is_binary() {
        assert_eq!(guess_category(Path::new("blob")), FileCategory::Binary);
        assert_eq!(
            guess_category(Path::new("a.zzzunknown")),
            FileCategory::Binary
        );
    }
}
