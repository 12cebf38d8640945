//! Project root and fixed path resolution for stackgen.
//!
//! This module is the "locate" step of the conversion. The project root is
//! baked in at compile time from the crate's manifest directory, so the
//! binary always regenerates the files of the repository it was built from,
//! no matter which directory it is invoked from. Both the input and the
//! output live at fixed paths under that root; nothing is read from the
//! environment at runtime.

use crate::error::{Result, StackgenError};
use std::path::{Path, PathBuf};

/// Stack description path relative to the project root.
pub const SOURCE_RELATIVE_PATH: &str = "lib/tech_stack.yaml";

/// Generated data file path relative to the project root.
pub const OUTPUT_RELATIVE_PATH: &str = "lib/tech_stack_data.js";

/// Resolved paths for one conversion run.
///
/// All paths are fixed once the root is known; there are no configurable
/// locations.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Absolute path to the project root.
    pub root: PathBuf,

    /// Path to the hand-maintained stack description (`{root}/lib/tech_stack.yaml`).
    pub source_path: PathBuf,

    /// Path to the generated data file (`{root}/lib/tech_stack_data.js`).
    pub output_path: PathBuf,
}

impl BuildContext {
    /// Resolve the context for the project this binary was built from.
    ///
    /// Root discovery is infallible: the manifest directory is captured at
    /// compile time, so there is nothing to look up and nothing to fail.
    pub fn resolve() -> Self {
        Self::resolve_from(env!("CARGO_MANIFEST_DIR"))
    }

    /// Resolve a context rooted at a specific directory.
    ///
    /// This is useful for testing or for driving the conversion against a
    /// checkout rooted elsewhere.
    pub fn resolve_from<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let source_path = root.join(SOURCE_RELATIVE_PATH);
        let output_path = root.join(OUTPUT_RELATIVE_PATH);

        Self {
            root,
            source_path,
            output_path,
        }
    }

    /// Ensure the stack description exists, returning an error if not.
    ///
    /// This check runs before any parse attempt so a missing file gets a
    /// precise message naming the expected path rather than a read error.
    pub fn ensure_source_exists(&self) -> Result<()> {
        if !self.source_path.exists() {
            return Err(StackgenError::MissingInput(format!(
                "stack description not found: {}",
                self.source_path.display()
            )));
        }

        Ok(())
    }
}
