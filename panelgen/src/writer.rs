//! Output writer
//!
//! Files are written one by one as they come. A failure stops the run and
//! leaves whatever was already written in place.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::generator::GeneratedFile;

/// Write generated files under `root`, creating directories as needed
///
/// Returns each written path (`root` joined with the file path), in order.
///
/// # Errors
///
/// Returns [`Error::Io`] with the offending path on the first failure
pub fn write_files(root: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let path = root.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::write(&path, &file.content).map_err(|e| Error::io(&path, e))?;
        tracing::debug!(path = %path.display(), "Wrote file");
        written.push(path);
    }

    tracing::info!(root = %root.display(), files = written.len(), "Output written");
    Ok(written)
}
