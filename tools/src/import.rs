//! Reading `.mti` files back into producer space.

use std::fs;
use std::path::{Path, PathBuf};

use codec::{Advisory, DecodeOptions, MtiHeader, Position};
use serde::Serialize;

use crate::error::ToolError;

/// Result of importing one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportReport {
    pub path: PathBuf,
    pub header: MtiHeader,
    /// Decoded positions, in source (Z-up) space.
    pub positions: Vec<Position>,
    pub advisories: Vec<Advisory>,
}

impl ImportReport {
    /// Whether fewer records were present than the header declared.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.advisories.iter().any(Advisory::is_truncation)
    }

    /// One-line status message for the user.
    #[must_use]
    pub fn status(&self) -> String {
        let mut status = format!(
            "Imported {} of {} instances from {}",
            self.positions.len(),
            self.header.instance_count,
            self.path.display()
        );
        if !self.advisories.is_empty() {
            status.push_str(&format!(" ({} warnings)", self.advisories.len()));
        }
        status
    }
}

/// Reads and decodes the file at `path`.
pub fn import_file(path: &Path, options: &DecodeOptions) -> Result<ImportReport, ToolError> {
    let bytes = fs::read(path).map_err(|err| ToolError::io(path, err))?;
    let decoded = codec::decode(&bytes, options).map_err(|source| ToolError::Codec {
        path: path.to_path_buf(),
        source,
    })?;

    let report = ImportReport {
        path: path.to_path_buf(),
        header: decoded.header,
        positions: decoded.positions(),
        advisories: decoded.advisories,
    };
    tracing::info!(
        path = %report.path.display(),
        declared = report.header.instance_count,
        decoded = report.positions.len(),
        "import complete"
    );
    Ok(report)
}
