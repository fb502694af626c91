//! Entry point shared by the `gen-emj` and `gen-fas` binaries.
//!
//! Each binary parses its (empty) argument list with clap, which only
//! provides `--help` and `--version`, then hands its variant to [`run`].

use crate::config::Variant;
use crate::{output, walk};
use std::error::Error;

/// Help text shared by both binaries.
pub const LONG_ABOUT: &str = "\
Writes an index.html into every directory under the current directory,
listing its files and subdirectories with icons, sizes and modification
times. Run it from the top of the tree you want to publish.

Skipped:
  .*             hidden files and directories
  .git/          version-control metadata
  __pycache__/   bytecode caches
  index.html     existing pages (always regenerated)

Every run rewrites every page. Set RUST_LOG=debug to see what was skipped.";

/// Package version, or `dev@<hash>` for builds off a release tag.
pub fn version_string() -> &'static str {
    if env!("DIRINDEX_ON_RELEASE_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    let hash = env!("DIRINDEX_GIT_HASH");
    if hash.is_empty() {
        "dev@unknown"
    } else {
        // Leaked once at startup
        Box::leak(format!("dev@{hash}").into_boxed_str())
    }
}

/// Index the current working directory with `variant`.
pub fn run(variant: Variant) -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let root = std::env::current_dir()?;
    log::debug!("{} indexing {}", variant.program_name(), root.display());

    output::print_start(&root);
    let summary = walk::walk(&root, variant, output::print_written)?;
    output::print_summary(&summary, &root);

    Ok(())
}
