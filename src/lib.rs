//! # dirindex
//!
//! Turns a directory tree into a browsable static site by writing an
//! `index.html` into every directory. Each page lists the directory's files
//! and subdirectories with an icon, a human-readable size and a modification
//! time, and links down into subdirectories and back up to the parent.
//!
//! # Pipeline
//!
//! ```text
//! walk      root/        →  every visible directory, pre-order
//! listing   directory    →  sorted Vec<DirectoryEntry>
//! render    entries      →  Markup (one self-contained HTML document)
//! generate  markup       →  directory/index.html
//! ```
//!
//! Each directory's page depends only on its own immediate children, never on
//! the pages of its descendants. The walk is sequential; a failure anywhere
//! except a file-size lookup aborts the run, and rerunning regenerates
//! everything from scratch.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`walk`] | Recursive directory walk, skip rules, run counters |
//! | [`generate`] | One directory → one written `index.html` |
//! | [`listing`] | Child enumeration, size/time labels, display order |
//! | [`icons`] | Extension → icon table and per-variant glyphs |
//! | [`render`] | Maud templates for the index page |
//! | [`config`] | Fixed skip lists and the two presentation presets |
//! | [`output`] | Progress lines printed to stdout |
//! | [`cli`] | Shared entry point of the `gen-emj` and `gen-fas` binaries |
//!
//! # Design Decisions
//!
//! ## Two Binaries, No Flags
//!
//! The emoji and Font Awesome presets differ only in glyphs and branding, so
//! they share every module and are selected by which binary runs. Neither
//! binary accepts options beyond `--help` and `--version`; the scan root is
//! always the working directory.
//!
//! ## Maud Over String Concatenation
//!
//! File names are untrusted text. Rendering through maud escapes every
//! interpolated value, so a file called `<b>&.txt` shows up literally instead
//! of becoming markup.
//!
//! ## No Change Detection
//!
//! Pages are cheap to produce and the trees are small, so every run rewrites
//! every page. Two runs over an unchanged tree differ only in the footer's
//! generation timestamp.

pub mod cli;
pub mod config;
pub mod generate;
pub mod icons;
pub mod listing;
pub mod output;
pub mod render;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_helpers;
