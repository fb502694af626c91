//! Directory listing: one [`DirectoryEntry`] per visible child.
//!
//! [`read_entries`] lists a directory's immediate children, drops the ones the
//! skip rules hide, classifies the rest, computes their labels and returns
//! them in display order (directories first, then files, each group sorted
//! case-insensitively by name).
//!
//! Reading a file's size is the one operation allowed to fail quietly: the
//! label falls back to [`SIZE_UNKNOWN`]. Every other I/O error propagates.

use crate::config::{self, Variant};
use crate::icons::Icon;
use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Size label used when a file's size cannot be read.
pub const SIZE_UNKNOWN: &str = "未知";

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;

/// One listed child of a directory being indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub is_dir: bool,
    /// Human-readable size; empty for directories.
    pub size_label: String,
    /// Local modification time, `YYYY-MM-DD HH:MM`.
    pub modified_label: String,
    pub icon: Icon,
}

impl DirectoryEntry {
    /// Stat `path` and build its entry.
    ///
    /// Classification follows symlinks. The size falls back to
    /// [`SIZE_UNKNOWN`]; a failure to read the modification time is an error.
    pub fn inspect(path: &Path, name: String) -> io::Result<DirectoryEntry> {
        let is_dir = path.is_dir();
        let size_label = if is_dir {
            String::new()
        } else {
            size_label(path)
        };
        let modified_label = format_modified(fs::metadata(path)?.modified()?);
        let icon = if is_dir {
            Icon::Folder
        } else {
            Icon::for_file_name(&name)
        };

        Ok(DirectoryEntry {
            name,
            is_dir,
            size_label,
            modified_label,
            icon,
        })
    }

    /// Link target relative to the page listing this entry.
    ///
    /// Directories link to their own index page, files to themselves.
    pub fn href(&self) -> String {
        if self.is_dir {
            format!("{}/{}", self.name, config::INDEX_FILE)
        } else {
            self.name.clone()
        }
    }
}

/// List, filter, inspect and sort the children of `dir`.
pub fn read_entries(dir: &Path, variant: Variant) -> io::Result<Vec<DirectoryEntry>> {
    let mut entries = Vec::new();
    for item in fs::read_dir(dir)? {
        let item = item?;
        let name = item.file_name().to_string_lossy().into_owned();
        if !config::is_listed(&name, variant) {
            log::debug!("not listing {}", item.path().display());
            continue;
        }
        entries.push(DirectoryEntry::inspect(&item.path(), name)?);
    }

    sort_entries(&mut entries);
    Ok(entries)
}

/// Directories before files; within each group, case-insensitive by name.
///
/// The sort is stable, so names equal up to case keep listing order.
pub fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort_by_key(|e| (!e.is_dir, e.name.to_lowercase()));
}

/// Size label for the file at `path`, or [`SIZE_UNKNOWN`] on any stat error.
pub fn size_label(path: &Path) -> String {
    match fs::metadata(path) {
        Ok(meta) => format_size(meta.len()),
        Err(err) => {
            log::warn!("cannot read size of {}: {err}", path.display());
            SIZE_UNKNOWN.to_string()
        }
    }
}

/// Format a byte count in the largest unit that keeps it below 1024.
///
/// Bytes are shown as an integer; KB and up get one decimal place. Exact
/// unit boundaries round up to the larger unit (1024 → `1.0 KB`).
pub fn format_size(bytes: u64) -> String {
    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    }
}

/// `YYYY-MM-DD HH:MM` in local time.
pub fn format_modified(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}
