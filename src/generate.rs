//! Index page generation for a single directory.
//!
//! [`generate_index`] lists one directory, renders its page and writes
//! `index.html` into it, replacing whatever was there. The page depends only
//! on the directory's immediate children, so directories can be generated in
//! any order.

use crate::config::{INDEX_FILE, Variant};
use crate::listing::{self, DirectoryEntry};
use crate::render::{self, PageLocation};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory is outside the scan root: {0}")]
    OutsideRoot(PathBuf),
}

/// Result of writing one index page.
#[derive(Debug)]
pub struct GeneratedPage {
    /// Path of the written `index.html`.
    pub path: PathBuf,
    pub location: PageLocation,
    /// Entries listed on the page, in display order.
    pub entries: Vec<DirectoryEntry>,
}

/// Generate `dir/index.html`, stamped with the current time.
pub fn generate_index(
    dir: &Path,
    root: &Path,
    variant: Variant,
) -> Result<GeneratedPage, GenerateError> {
    generate_index_at(dir, root, variant, Local::now())
}

/// Generate `dir/index.html` with an explicit generation time.
pub fn generate_index_at(
    dir: &Path,
    root: &Path,
    variant: Variant,
    generated_at: DateTime<Local>,
) -> Result<GeneratedPage, GenerateError> {
    let location =
        PageLocation::new(dir, root).ok_or_else(|| GenerateError::OutsideRoot(dir.to_path_buf()))?;
    let entries = listing::read_entries(dir, variant)?;

    let page = render::render_page(&location, &entries, variant, generated_at);
    let path = dir.join(INDEX_FILE);
    fs::write(&path, page.into_string())?;
    log::debug!("{} entries in {}", entries.len(), path.display());

    Ok(GeneratedPage {
        path,
        location,
        entries,
    })
}
