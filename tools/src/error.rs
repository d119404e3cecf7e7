//! Error types for file-level operations.

use std::fmt;
use std::io;
use std::path::PathBuf;

use codec::CodecError;

/// Errors raised by the export/import collaborators.
#[derive(Debug)]
pub enum ToolError {
    /// The producer supplied zero placements.
    NoInputData,

    /// Reading or writing a file failed.
    Io { path: PathBuf, source: io::Error },

    /// The codec rejected the data.
    Codec { path: PathBuf, source: CodecError },

    /// A placement list could not be parsed.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl ToolError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoInputData => write!(f, "no placements to export"),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Codec { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Parse { path, source } => {
                write!(f, "{}: invalid placement list: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ToolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoInputData => None,
            Self::Io { source, .. } => Some(source),
            Self::Codec { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_no_input_data() {
        assert_eq!(ToolError::NoInputData.to_string(), "no placements to export");
    }

    #[test]
    fn display_io_includes_path() {
        let err = ToolError::io(
            "meadow.mti",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("meadow.mti"));
        assert!(msg.contains("missing"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn display_codec_includes_cause() {
        let err = ToolError::Codec {
            path: PathBuf::from("bad.mti"),
            source: CodecError::InvalidSignature { found: 0 },
        };
        assert!(err.to_string().contains("invalid signature"));
    }
}
