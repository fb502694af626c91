//! Icon tokens and their per-variant glyphs.
//!
//! An [`Icon`] is chosen from a file's extension through [`EXTENSION_ICONS`],
//! an immutable table keyed by lowercase extension. Each token then resolves
//! to a literal pictograph ([`Icon::emoji`]) or a Font Awesome class string
//! ([`Icon::font_class`]) depending on the page's variant.
//!
//! [`Chrome`] covers the decorative glyphs around the listing (banner, nav
//! links, footer). The emoji preset leaves most of them blank.

use std::path::Path;

/// Display icon of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Folder,
    Pdf,
    Word,
    Text,
    Slides,
    Sheet,
    Python,
    JavaScript,
    Java,
    Html,
    Css,
    Php,
    CSource,
    Data,
    Zip,
    Archive,
    Image,
    Audio,
    Video,
    Executable,
    Disc,
    Generic,
}

/// Lowercase extension → icon. Anything missing maps to [`Icon::Generic`].
pub const EXTENSION_ICONS: &[(&str, Icon)] = &[
    // Documents
    ("pdf", Icon::Pdf),
    ("doc", Icon::Word),
    ("docx", Icon::Word),
    ("txt", Icon::Text),
    ("md", Icon::Text),
    ("ppt", Icon::Slides),
    ("pptx", Icon::Slides),
    ("xls", Icon::Sheet),
    ("xlsx", Icon::Sheet),
    // Code
    ("py", Icon::Python),
    ("js", Icon::JavaScript),
    ("java", Icon::Java),
    ("html", Icon::Html),
    ("css", Icon::Css),
    ("php", Icon::Php),
    ("c", Icon::CSource),
    ("cpp", Icon::CSource),
    ("h", Icon::CSource),
    ("json", Icon::Data),
    ("xml", Icon::Data),
    // Archives
    ("zip", Icon::Zip),
    ("rar", Icon::Archive),
    ("7z", Icon::Archive),
    ("tar", Icon::Archive),
    ("gz", Icon::Archive),
    // Media
    ("jpg", Icon::Image),
    ("jpeg", Icon::Image),
    ("png", Icon::Image),
    ("gif", Icon::Image),
    ("bmp", Icon::Image),
    ("mp3", Icon::Audio),
    ("wav", Icon::Audio),
    ("flac", Icon::Audio),
    ("mp4", Icon::Video),
    ("avi", Icon::Video),
    ("mkv", Icon::Video),
    // Other
    ("exe", Icon::Executable),
    ("msi", Icon::Executable),
    ("iso", Icon::Disc),
    ("dmg", Icon::Disc),
];

impl Icon {
    /// Resolve the icon for a file from its name's extension.
    ///
    /// The extension is whatever follows the last `.`, compared
    /// case-insensitively. A name without one (or with only a leading dot)
    /// gets the generic icon.
    pub fn for_file_name(name: &str) -> Icon {
        let ext = Path::new(name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        Icon::for_extension(&ext)
    }

    pub fn for_extension(ext: &str) -> Icon {
        EXTENSION_ICONS
            .iter()
            .find(|(key, _)| *key == ext)
            .map(|&(_, icon)| icon)
            .unwrap_or(Icon::Generic)
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Icon::Folder => "📁",
            Icon::Pdf | Icon::Text | Icon::Generic => "📄",
            Icon::Word => "📝",
            Icon::Slides | Icon::Sheet => "📊",
            Icon::Python => "🐍",
            Icon::JavaScript => "📜",
            Icon::Java => "☕",
            Icon::Html => "🌐",
            Icon::Css => "🎨",
            Icon::Php => "🐘",
            Icon::CSource | Icon::Executable => "⚙️",
            Icon::Data => "📋",
            Icon::Zip | Icon::Archive => "📦",
            Icon::Image => "🖼️",
            Icon::Audio => "🎵",
            Icon::Video => "🎬",
            Icon::Disc => "💿",
        }
    }

    pub fn font_class(self) -> &'static str {
        match self {
            Icon::Folder => "fas fa-folder",
            Icon::Pdf => "fas fa-file-pdf",
            Icon::Word => "fas fa-file-word",
            Icon::Text => "fas fa-file-lines",
            Icon::Slides => "fas fa-file-powerpoint",
            Icon::Sheet => "fas fa-file-excel",
            Icon::Python
            | Icon::JavaScript
            | Icon::Java
            | Icon::Html
            | Icon::Css
            | Icon::Php
            | Icon::CSource
            | Icon::Data
            | Icon::Executable => "fas fa-file-code",
            Icon::Zip => "fas fa-file-zipper",
            Icon::Archive => "fas fa-file-archive",
            Icon::Image => "fas fa-file-image",
            Icon::Audio => "fas fa-file-audio",
            Icon::Video => "fas fa-file-video",
            Icon::Disc => "fas fa-compact-disc",
            Icon::Generic => "fas fa-file",
        }
    }
}

/// Decorative glyphs on the page around the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chrome {
    Banner,
    Home,
    ParentDir,
    CurrentPath,
    Clock,
    Count,
}

impl Chrome {
    pub fn emoji(self) -> Option<&'static str> {
        match self {
            Chrome::Banner | Chrome::ParentDir => Some("📁"),
            Chrome::Home => Some("🏠"),
            Chrome::CurrentPath | Chrome::Clock | Chrome::Count => None,
        }
    }

    pub fn font_class(self) -> Option<&'static str> {
        Some(match self {
            Chrome::Banner => "fas fa-folder-tree",
            Chrome::Home => "fas fa-home",
            Chrome::ParentDir => "fas fa-level-up-alt",
            Chrome::CurrentPath => "fas fa-folder-open",
            Chrome::Clock => "far fa-clock",
            Chrome::Count => "fas fa-list-ol",
        })
    }
}
