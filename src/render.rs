//! HTML rendering of a directory's index page.
//!
//! Uses [maud](https://maud.lambda.xyz/) so every interpolated value (file
//! names above all) is escaped by construction. The stylesheet in
//! `static/index.css` is embedded at compile time and inlined into every page,
//! which keeps each `index.html` self-contained apart from the optional
//! icon-font stylesheet.
//!
//! ## Page Layout
//!
//! ```text
//! header        banner (+ subtitle)
//! .nav-bar      home link [| parent link]
//! .current-path relative path, "/" at the scan root
//! .file-list    header row, then one <a.list-item> per entry
//! footer        generation time, entry count
//! ```
//!
//! [`render_page`] is pure: the generation time is an argument, so the same
//! listing and time always yield the same bytes.

use crate::config::Variant;
use crate::icons::{Chrome, Icon};
use crate::listing::DirectoryEntry;
use chrono::{DateTime, Local};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::path::Path;

const CSS: &str = include_str!("../static/index.css");

/// Parent link target on every non-root page.
pub const PARENT_HREF: &str = "../index.html";

/// Title suffix for the scan root.
pub const ROOT_TITLE: &str = "根目录";

/// Current-path display for the scan root.
pub const ROOT_PATH: &str = "/";

const GENERATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Where a page sits relative to the scan root.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageLocation {
    components: Vec<String>,
}

impl PageLocation {
    /// The scan root itself.
    pub fn root() -> PageLocation {
        PageLocation::default()
    }

    /// Location of `dir` under `root`, or `None` if `dir` is outside it.
    pub fn new(dir: &Path, root: &Path) -> Option<PageLocation> {
        let rel = dir.strip_prefix(root).ok()?;
        Some(PageLocation {
            components: rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect(),
        })
    }

    pub fn is_root(&self) -> bool {
        self.components.is_empty()
    }

    /// Path relative to the scan root, `/`-separated; empty at the root.
    pub fn relative_path(&self) -> String {
        self.components.join("/")
    }

    fn title_path(&self) -> String {
        if self.is_root() {
            ROOT_TITLE.to_string()
        } else {
            self.relative_path()
        }
    }

    fn display_path(&self) -> String {
        if self.is_root() {
            ROOT_PATH.to_string()
        } else {
            self.relative_path()
        }
    }
}

// ============================================================================
// HTML Components
// ============================================================================

fn base_document(title: &str, variant: Variant, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="zh-CN" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if let Some(href) = variant.preset().icon_stylesheet {
                    link rel="stylesheet" href=(href);
                }
                style { (PreEscaped(CSS)) }
            }
            body class=[variant.body_class()] {
                (content)
            }
        }
    }
}

/// Decorative glyph followed by a space, or nothing if the variant has none.
fn chrome(variant: Variant, glyph: Chrome) -> Markup {
    match variant {
        Variant::Emoji => html! {
            @if let Some(emoji) = glyph.emoji() { (emoji) " " }
        },
        Variant::FontAwesome => html! {
            @if let Some(class) = glyph.font_class() { i class=(class) {} " " }
        },
    }
}

fn entry_icon(variant: Variant, icon: Icon) -> Markup {
    match variant {
        Variant::Emoji => html! { (icon.emoji()) },
        Variant::FontAwesome => html! { i class=(icon.font_class()) {} },
    }
}

fn nav_bar(location: &PageLocation, variant: Variant) -> Markup {
    html! {
        div.nav-bar {
            a href=(variant.preset().home_href) { (chrome(variant, Chrome::Home)) "回到首页" }
            @if !location.is_root() {
                " | "
                a href=(PARENT_HREF) { (chrome(variant, Chrome::ParentDir)) ".. (返回上一级)" }
            }
        }
    }
}

fn file_list(entries: &[DirectoryEntry], variant: Variant) -> Markup {
    html! {
        div.file-list {
            div.list-header {
                div { "名称" }
                div { "大小" }
                div.modified-time { "修改时间" }
            }
            @for entry in entries {
                a.list-item href=(entry.href()) {
                    div.item-name {
                        span.icon { (entry_icon(variant, entry.icon)) }
                        (entry.name)
                        @if entry.is_dir { "/" }
                    }
                    div {
                        @if entry.is_dir {
                            span.dir-tag { "目录" }
                        } @else {
                            (entry.size_label)
                        }
                    }
                    div.modified-time { (entry.modified_label) }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderer
// ============================================================================

/// Render the complete index page for one directory.
///
/// `entries` must already be in display order.
pub fn render_page(
    location: &PageLocation,
    entries: &[DirectoryEntry],
    variant: Variant,
    generated_at: DateTime<Local>,
) -> Markup {
    let preset = variant.preset();
    let title = format!("{} - {}", preset.page_title, location.title_path());
    let generated = generated_at.format(GENERATED_AT_FORMAT).to_string();

    let content = html! {
        header {
            h1 { (chrome(variant, Chrome::Banner)) (preset.banner) }
            @if let Some(subtitle) = preset.subtitle {
                p { (subtitle) }
            }
        }
        (nav_bar(location, variant))
        div.current-path {
            strong { (chrome(variant, Chrome::CurrentPath)) "当前路径:" }
            " "
            (location.display_path())
        }
        (file_list(entries, variant))
        footer {
            p { (chrome(variant, Chrome::Clock)) "最后生成时间: " (generated) }
            p { (chrome(variant, Chrome::Count)) "共 " (entries.len()) " 个项目" }
        }
    };

    base_document(&title, variant, content)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn sub_location(path: &str) -> PageLocation {
        PageLocation::new(&Path::new("/srv/files").join(path), Path::new("/srv/files")).unwrap()
    }

    fn render(location: &PageLocation, entries: &[DirectoryEntry], variant: Variant) -> String {
        render_page(location, entries, variant, fixed_time()).into_string()
    }

    #[test]
    fn location_of_root_and_nested_dirs() {
        let root = Path::new("/srv/files");
        let here = PageLocation::new(root, root).unwrap();
        assert!(here.is_root());
        assert_eq!(here, PageLocation::root());
        assert_eq!(here.relative_path(), "");

        let nested = sub_location("a/b");
        assert!(!nested.is_root());
        assert_eq!(nested.relative_path(), "a/b");
    }

    #[test]
    fn location_outside_root_is_none() {
        assert!(PageLocation::new(Path::new("/etc"), Path::new("/srv/files")).is_none());
    }

    #[test]
    fn document_starts_with_doctype_and_inlines_css() {
        let html = render(&PageLocation::root(), &[], Variant::Emoji);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(html.contains("'Segoe UI'"));
        assert!(html.contains(".list-item"));
    }

    #[test]
    fn root_page_uses_root_sentinels() {
        let html = render(&PageLocation::root(), &[], Variant::Emoji);
        assert!(html.contains("<title>文件索引 - 根目录</title>"));
        assert!(html.contains("当前路径:</strong> /</div>"));
    }

    #[test]
    fn nested_page_shows_relative_path() {
        let html = render(&sub_location("docs/api"), &[], Variant::FontAwesome);
        assert!(html.contains("<title>下载Stamon - docs/api</title>"));
        assert!(html.contains("</strong> docs/api</div>"));
    }

    #[test]
    fn root_page_has_no_parent_link() {
        let html = render(&PageLocation::root(), &[entry("sub", true)], Variant::Emoji);
        assert!(!html.contains(PARENT_HREF));
        assert!(!html.contains("返回上一级"));
    }

    #[test]
    fn nested_page_has_exactly_one_parent_link() {
        for variant in [Variant::Emoji, Variant::FontAwesome] {
            let html = render(&sub_location("sub"), &[entry("deeper", true)], variant);
            let links = html.matches(r#"href="../index.html""#).count();
            assert_eq!(links, 1, "{variant:?}");
        }
    }

    #[test]
    fn home_link_per_variant() {
        let emoji = render(&sub_location("sub"), &[], Variant::Emoji);
        assert!(emoji.contains(r#"<a href="index.html">🏠 回到首页</a>"#));

        let font = render(&sub_location("sub"), &[], Variant::FontAwesome);
        assert!(font.contains(
            r#"<a href="https://stamon-rsc.github.io/releases/index.html"><i class="fas fa-home"></i> 回到首页</a>"#
        ));
    }

    #[test]
    fn rows_follow_entry_order_and_link_targets() {
        let entries = vec![
            entry("a", true),
            entry("Zebra", true),
            entry("apple.py", false),
            entry("B.txt", false),
        ];
        let html = render(&PageLocation::root(), &entries, Variant::Emoji);
        assert_eq!(
            listed_hrefs(&html),
            vec!["a/index.html", "Zebra/index.html", "apple.py", "B.txt"]
        );
    }

    #[test]
    fn directory_rows_have_slash_and_tag() {
        let html = render(&PageLocation::root(), &[entry("photos", true)], Variant::Emoji);
        assert!(html.contains("photos/</div>"));
        assert!(html.contains(r#"<span class="dir-tag">目录</span>"#));
        assert!(html.contains(r#"<span class="icon">📁</span>"#));
    }

    #[test]
    fn file_rows_show_size_and_modified() {
        let html = render(&PageLocation::root(), &[entry("notes.md", false)], Variant::Emoji);
        assert!(html.contains("<div>1 B</div>"));
        assert!(html.contains(r#"<div class="modified-time">2024-01-02 03:04</div>"#));
        assert!(!html.contains("dir-tag\">"));
    }

    #[test]
    fn font_variant_links_icon_stylesheet_and_uses_classes() {
        let html = render(&PageLocation::root(), &[entry("song.mp3", false)], Variant::FontAwesome);
        assert!(html.contains(r#"<link rel="stylesheet" href="https://cdnjs.cloudflare.com/"#));
        assert!(html.contains(r#"<body class="icon-font">"#));
        assert!(html.contains(r#"<span class="icon"><i class="fas fa-file-audio"></i></span>"#));
        assert!(html.contains(r#"<i class="fas fa-folder-tree"></i> 下载Stamon"#));
    }

    #[test]
    fn emoji_variant_has_no_external_stylesheet() {
        let html = render(&PageLocation::root(), &[entry("song.mp3", false)], Variant::Emoji);
        assert!(!html.contains("<link"));
        assert!(!html.contains("<i class="));
        assert!(html.contains("<body>"));
        assert!(html.contains(r#"<span class="icon">🎵</span>"#));
        assert!(html.contains("<p>简洁的文件目录浏览界面</p>"));
    }

    #[test]
    fn footer_shows_time_and_count() {
        let entries = vec![entry("a", true), entry("b.txt", false), entry("c.txt", false)];
        let html = render(&PageLocation::root(), &entries, Variant::Emoji);
        assert!(html.contains("最后生成时间: 2024-05-06 07:08:09"));
        assert!(html.contains("共 3 个项目"));
    }

    #[test]
    fn names_are_escaped() {
        let html = render(
            &PageLocation::root(),
            &[entry("<script>&co.txt", false)],
            Variant::Emoji,
        );
        assert!(!html.contains("<script>&co"));
        assert!(html.contains("&lt;script&gt;&amp;co.txt"));
        assert_eq!(listed_hrefs(&html), vec!["&lt;script&gt;&amp;co.txt"]);
    }

    #[test]
    fn non_ascii_names_round_trip() {
        let html = render(
            &sub_location("资料/文档"),
            &[entry("报告 2024.pdf", false), entry("照片", true)],
            Variant::FontAwesome,
        );
        assert!(html.contains("报告 2024.pdf"));
        assert!(html.contains("照片/index.html"));
        assert!(html.contains("下载Stamon - 资料/文档"));
    }

    #[test]
    fn same_inputs_render_identically() {
        let entries = vec![entry("a", true), entry("b.txt", false)];
        let first = render(&sub_location("x"), &entries, Variant::FontAwesome);
        let second = render(&sub_location("x"), &entries, Variant::FontAwesome);
        assert_eq!(first, second);
    }
}
