//! Fixed configuration: skip rules and the two presentation presets.
//!
//! Nothing here is loaded at runtime. The generator takes no flags, reads no
//! environment and no config file, so every knob is a constant chosen at
//! compile time. The only runtime choice is which [`Variant`] a program
//! renders, and that is fixed per binary:
//!
//! | Binary | Variant | Icons | Home link |
//! |--------|---------|-------|-----------|
//! | `gen-emj` | [`Variant::Emoji`] | Unicode pictographs | relative `index.html` |
//! | `gen-fas` | [`Variant::FontAwesome`] | Font Awesome classes | fixed hosted URL |
//!
//! ## Skip Rules
//!
//! - Names starting with [`HIDDEN_MARKER`] are never listed and never descended.
//! - Directories named in [`SKIPPED_DIRS`] are never descended.
//! - [`INDEX_FILE`] is never listed (it is the page being generated).
//! - Each preset may name extra files to hide; the font-icon preset hides the
//!   generator programs themselves.

/// Hidden-file marker. Entries whose name begins with it are ignored.
pub const HIDDEN_MARKER: char = '.';

/// Name of the generated page in every visited directory.
pub const INDEX_FILE: &str = "index.html";

/// Directories that are never descended into, wherever they appear.
pub const SKIPPED_DIRS: &[&str] = &[".git", "__pycache__"];

/// Names of the generator programs, hidden from their own listings.
pub const GENERATOR_NAMES: &[&str] = &[
    "gen-fas",
    "gen-emj",
    "gen-fas.exe",
    "gen-emj.exe",
    "gen_fas.py",
    "gen_emj.py",
];

/// Icon-font stylesheet referenced by the font-icon preset.
pub const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Hosted home page for the font-icon preset.
pub const HOSTED_HOME: &str = "https://stamon-rsc.github.io/releases/index.html";

/// Presentation variant of the generated pages.
///
/// Both variants share the same page structure and the same
/// extension-to-category mapping; they differ in icon vocabulary and
/// branding strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Icons are literal Unicode pictographs.
    Emoji,
    /// Icons are Font Awesome marker classes resolved by a CDN stylesheet.
    FontAwesome,
}

/// Fixed branding and listing rules for one [`Variant`].
#[derive(Debug)]
pub struct Preset {
    /// Prefix of the `<title>`, followed by ` - <path>`.
    pub page_title: &'static str,
    /// Text of the header banner.
    pub banner: &'static str,
    /// Optional line under the banner.
    pub subtitle: Option<&'static str>,
    /// Target of the nav bar's home link.
    pub home_href: &'static str,
    /// External stylesheet linked from `<head>`, if any.
    pub icon_stylesheet: Option<&'static str>,
    /// File names hidden from listings in addition to the skip rules.
    pub excluded_names: &'static [&'static str],
}

static EMOJI: Preset = Preset {
    page_title: "文件索引",
    banner: "文件索引系统",
    subtitle: Some("简洁的文件目录浏览界面"),
    home_href: INDEX_FILE,
    icon_stylesheet: None,
    excluded_names: &[],
};

static FONT_AWESOME: Preset = Preset {
    page_title: "下载Stamon",
    banner: "下载Stamon",
    subtitle: None,
    home_href: HOSTED_HOME,
    icon_stylesheet: Some(FONT_AWESOME_CSS),
    excluded_names: GENERATOR_NAMES,
};

impl Variant {
    pub fn preset(self) -> &'static Preset {
        match self {
            Variant::Emoji => &EMOJI,
            Variant::FontAwesome => &FONT_AWESOME,
        }
    }

    /// Name of the binary that renders this variant.
    pub fn program_name(self) -> &'static str {
        match self {
            Variant::Emoji => "gen-emj",
            Variant::FontAwesome => "gen-fas",
        }
    }

    /// CSS class put on `<body>` so the stylesheet can adapt icon layout.
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Variant::Emoji => None,
            Variant::FontAwesome => Some("icon-font"),
        }
    }
}

/// True for names starting with the hidden-file marker.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_MARKER)
}

/// True for directory names the walker must not descend into.
pub fn is_skipped_dir(name: &str) -> bool {
    is_hidden(name) || SKIPPED_DIRS.contains(&name)
}

/// Whether a directory child should appear in the generated listing.
pub fn is_listed(name: &str, variant: Variant) -> bool {
    !is_hidden(name) && name != INDEX_FILE && !variant.preset().excluded_names.contains(&name)
}
