//! Writing placements to `.mti` files.

use std::io::Write;
use std::path::{Path, PathBuf};

use codec::Placement;
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::ToolError;

/// Summary of a completed export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub path: PathBuf,
    pub instance_count: usize,
    pub bytes_written: usize,
}

impl ExportReport {
    /// One-line status message for the user.
    #[must_use]
    pub fn status(&self) -> String {
        format!(
            "Exported {} instances to {} ({} bytes)",
            self.instance_count,
            self.path.display(),
            self.bytes_written
        )
    }
}

/// Encodes `placements` and writes them to `path`.
///
/// Fails with [`ToolError::NoInputData`] before touching the filesystem when
/// `placements` is empty. The file is replaced atomically, so a failed
/// export leaves any previous file at `path` intact.
pub fn export_file(
    path: &Path,
    placements: &[Placement],
    version: u32,
) -> Result<ExportReport, ToolError> {
    if placements.is_empty() {
        return Err(ToolError::NoInputData);
    }

    let bytes = codec::encode(placements, version).map_err(|source| ToolError::Codec {
        path: path.to_path_buf(),
        source,
    })?;
    write_atomic(path, &bytes)?;

    let report = ExportReport {
        path: path.to_path_buf(),
        instance_count: placements.len(),
        bytes_written: bytes.len(),
    };
    tracing::info!(
        path = %report.path.display(),
        instances = report.instance_count,
        bytes = report.bytes_written,
        "export complete"
    );
    Ok(report)
}

/// Writes `bytes` to a temp file next to `path`, syncs it, then renames it
/// over `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ToolError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|err| ToolError::io(dir, err))?;
    file.write_all(bytes)
        .map_err(|err| ToolError::io(file.path(), err))?;
    file.as_file()
        .sync_all()
        .map_err(|err| ToolError::io(file.path(), err))?;
    file.persist(path)
        .map_err(|err| ToolError::io(path, err.error))?;
    Ok(())
}
