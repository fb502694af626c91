//! Recursive walk of the scan root.
//!
//! Visits every directory under the root in pre-order and generates its index
//! page before moving on. Hidden entries and the directories in
//! [`SKIPPED_DIRS`](crate::config::SKIPPED_DIRS) are pruned, so nothing
//! beneath them is visited either:
//!
//! ```text
//! root/              → root/index.html
//! ├── sub/           → sub/index.html
//! │   ├── .git/      (pruned)
//! │   └── notes.md   counted
//! ├── __pycache__/   (pruned)
//! └── .env           (hidden, not counted)
//! ```
//!
//! Symlinked directories are listed on their parent's page but never
//! followed. Any error while walking or generating ends the walk.

use crate::config::{self, INDEX_FILE, Variant};
use crate::generate::{self, GenerateError, GeneratedPage};
use std::path::Path;
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Generate error: {0}")]
    Generate(#[from] GenerateError),
}

/// Counters accumulated over one walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    /// Directories that received an index page.
    pub directories: usize,
    /// Non-hidden files found in those directories, excluding `index.html`.
    pub files: usize,
}

/// Walk `root`, generating one index page per visited directory.
///
/// `on_page` is called after each page is written, in visit order.
pub fn walk<F>(root: &Path, variant: Variant, mut on_page: F) -> Result<WalkSummary, WalkError>
where
    F: FnMut(&GeneratedPage),
{
    let mut summary = WalkSummary::default();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(should_visit);

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() {
            let page = generate::generate_index(entry.path(), root, variant)?;
            summary.directories += 1;
            on_page(&page);
        } else if counts_as_file(&entry) {
            summary.files += 1;
        }
    }

    Ok(summary)
}

/// Prune hidden entries and skipped directories. The root is always visited.
fn should_visit(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    let keep = if entry.file_type().is_dir() {
        !config::is_skipped_dir(&name)
    } else {
        !config::is_hidden(&name)
    };
    if !keep {
        log::debug!("skipping {}", entry.path().display());
    }
    keep
}

/// Files are everything that is not a directory once symlinks are resolved,
/// minus the generated page itself.
fn counts_as_file(entry: &DirEntry) -> bool {
    !entry.path().is_dir() && entry.file_name() != INDEX_FILE
}
