use std::fs;
use std::path::Path;

use spool_format::ScopedWriter;

use crate::context::SubmissionContext;
use crate::error::SubmitError;

/// Copies `source`'s bytes into `final_path` via a temp-then-rename, the
/// publish sequence every staged file in this repository uses.
pub(crate) fn stage_copy(
    ctx: &SubmissionContext,
    spool_dir: &Path,
    source: &Path,
    final_path: &Path,
) -> Result<(), SubmitError> {
    let bytes = fs::read(source).map_err(|source_err| SubmitError::IoFail {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    stage_bytes(ctx, spool_dir, &bytes, final_path)
}

/// Writes `bytes` into `final_path` via a temp-then-rename, for data that
/// has no backing file of its own (captured standard input).
pub(crate) fn stage_bytes(
    ctx: &SubmissionContext,
    spool_dir: &Path,
    bytes: &[u8],
    final_path: &Path,
) -> Result<(), SubmitError> {
    let temp = ctx.mint_temp(spool_dir)?;
    let mut writer = ScopedWriter::create(&temp)?;
    writer.write_all(bytes)?;
    writer.commit(final_path)?;
    Ok(())
}
