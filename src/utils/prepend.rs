// atomic prepend onto an existing file

use crate::error::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// write `block` in front of the current content of `path`
///
/// the merged content goes to a temporary file next to the destination which
/// is then renamed over it, so the destination is either fully old or fully
/// new. the destination must already exist.
pub fn prepend_to_file<P: AsRef<Path>>(path: P, block: &str) -> Result<()> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::DestinationMissing {
            path: path.to_path_buf(),
        });
    }

    // follow symlinks so the link itself survives the rename
    let target = fs::canonicalize(path).map_err(|e| Error::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let existing = fs::read(&target).map_err(|e| Error::FileReadError {
        path: target.clone(),
        source: e,
    })?;
    let permissions = fs::metadata(&target)
        .map_err(|e| Error::FileReadError {
            path: target.clone(),
            source: e,
        })?
        .permissions();

    let write_error = |source: std::io::Error| Error::FileWriteError {
        path: target.clone(),
        source,
    };

    let parent = target.parent().unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(parent).map_err(write_error)?;
    temp.write_all(block.as_bytes()).map_err(write_error)?;
    temp.write_all(&existing).map_err(write_error)?;
    temp.as_file().sync_all().map_err(write_error)?;
    fs::set_permissions(temp.path(), permissions).map_err(write_error)?;

    temp.persist(&target).map_err(|e| write_error(e.error))?;

    debug!(
        path = %target.display(),
        new_bytes = block.len(),
        old_bytes = existing.len(),
        "prepended changelog block"
    );
    Ok(())
}
