//! Shared test utilities for the dirindex test suite.
//!
//! Builds throwaway directory trees, constructs in-memory entries, and pulls
//! the listed links back out of rendered pages.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = make_tree(&["docs/", "docs/guide.md", "release.zip"]);
//! generate_index(tmp.path(), tmp.path(), Variant::Emoji).unwrap();
//! let html = read_page(tmp.path());
//! assert_eq!(listed_hrefs(&html), vec!["docs/index.html", "release.zip"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::icons::Icon;
use crate::listing::DirectoryEntry;
use chrono::{DateTime, Local, TimeZone};

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp directory holding `paths`.
///
/// A path ending in `/` becomes a directory; anything else becomes an empty
/// file. Parent directories are created as needed.
pub fn make_tree(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for path in paths {
        let full = tmp.path().join(path.trim_end_matches('/'));
        if path.ends_with('/') {
            std::fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// An entry with placeholder labels, icon resolved like the real listing.
pub fn entry(name: &str, is_dir: bool) -> DirectoryEntry {
    DirectoryEntry {
        name: name.to_string(),
        is_dir,
        size_label: if is_dir { String::new() } else { "1 B".to_string() },
        modified_label: "2024-01-02 03:04".to_string(),
        icon: if is_dir {
            Icon::Folder
        } else {
            Icon::for_file_name(name)
        },
    }
}

/// A fixed generation time so rendered pages compare byte for byte.
pub fn fixed_time() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap()
}

// =========================================================================
// Extractors
// =========================================================================

pub fn names(entries: &[DirectoryEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

/// Read the generated `index.html` in `dir`.
pub fn read_page(dir: &Path) -> String {
    std::fs::read_to_string(dir.join("index.html"))
        .unwrap_or_else(|e| panic!("no index.html in {}: {e}", dir.display()))
}

/// The `href` of every listing row, in page order (still HTML-escaped).
pub fn listed_hrefs(html: &str) -> Vec<&str> {
    const ROW: &str = r#"<a class="list-item" href=""#;
    html.match_indices(ROW)
        .map(|(start, _)| {
            let rest = &html[start + ROW.len()..];
            &rest[..rest.find('"').unwrap()]
        })
        .collect()
}
