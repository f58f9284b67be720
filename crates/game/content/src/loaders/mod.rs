//! Content file loaders.
//!
//! Content ships as RON files: one scenario file laying out the
//! overworld, one dialog file with every line the talkers can say.
//! Loaders parse those into the core's types and never touch them
//! again afterwards.

pub mod dialog;
pub mod scenario;

pub use dialog::{DialogLoader, DialogTable};
pub use scenario::ScenarioLoader;

use std::path::Path;

/// Result type for loader operations.
pub type LoadResult<T> = anyhow::Result<T>;

/// Reads a content file into a string.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
