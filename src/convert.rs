//! The conversion pipeline: locate, parse, render, write.
//!
//! One public operation, `convert()`, run once per build invocation. The
//! pipeline is deterministic and idempotent: re-running it on unchanged
//! input produces a byte-identical generated file. Any failure before the
//! final write leaves a pre-existing generated file untouched.

use crate::context::BuildContext;
use crate::document;
use crate::error::{Result, StackgenError};
use crate::render;
use std::path::PathBuf;

/// Run the conversion against the project this binary was built from.
///
/// Returns the path of the generated data file on success.
pub fn convert() -> Result<PathBuf> {
    convert_in(&BuildContext::resolve())
}

/// Run the conversion against an explicit build context.
pub fn convert_in(ctx: &BuildContext) -> Result<PathBuf> {
    ctx.ensure_source_exists()?;

    let tree = document::load(&ctx.source_path)?;
    let payload = render::render(&tree)?;

    // Full overwrite, no merge or append. Other I/O failures (permissions,
    // disk full) surface here as the write-failure class.
    std::fs::write(&ctx.output_path, payload).map_err(|e| {
        StackgenError::WriteFailure(format!(
            "failed to write '{}': {}",
            ctx.output_path.display(),
            e
        ))
    })?;

    Ok(ctx.output_path.clone())
}
