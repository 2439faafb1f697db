use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for zone files and tile-sheet assets
#[derive(Debug)]
pub enum EditorError {
    /// Tile-sheet image is missing or could not be decoded
    AssetLoad {
        /// Image path that failed
        path: PathBuf,
        /// Decoder or file system message
        reason: String,
    },
    /// File I/O error while reading or writing a zone
    Io {
        /// Zone file path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },
    /// Zone file content is malformed
    Parse {
        /// Zone file path
        path: PathBuf,
        /// 1-based line number of the offending line
        line: usize,
        /// What was wrong with it
        message: String,
    },
    /// Unsupported file format (non-`.zone`)
    UnsupportedFormat(String),
}

impl EditorError {
    pub(crate) fn parse(path: &std::path::Path, line: usize, message: impl Into<String>) -> Self {
        EditorError::Parse {
            path: path.to_path_buf(),
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::AssetLoad { path, reason } => {
                write!(f, "Failed to load tile sheet {}: {}", path.display(), reason)
            }
            EditorError::Io { path, source } => write!(f, "I/O error on {}: {}", path.display(), source),
            EditorError::Parse { path, line, message } => {
                write!(f, "Malformed zone file {} (line {}): {}", path.display(), line, message)
            }
            EditorError::UnsupportedFormat(path) => write!(f, "Unsupported file format: {}", path),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EditorError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
