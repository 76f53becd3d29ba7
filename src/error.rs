//! Crate-level error types.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors produced by the forcevis crate.
///
/// Everything here is raised during the load phase. Frame-level misses
/// at redraw time are not errors; see
/// [`RedrawOutcome`](crate::engine::RedrawOutcome).
#[derive(Debug)]
pub enum ForcevisError {
    /// An input file is missing or could not be read.
    FileUnreadable {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Malformed trajectory or scalar file content.
    Parse {
        /// Source label (file path, or `<memory>` for in-memory input).
        path: String,
        /// 1-based line number where parsing failed.
        line: usize,
        /// Human-readable description.
        message: String,
    },
    /// A single trajectory whose atom count changes between frames.
    InconsistentFrame {
        /// Frame index with the unexpected atom count.
        frame: usize,
        /// Atom count of the first frame.
        expected: usize,
        /// Atom count actually found.
        found: usize,
    },
    /// A vector series whose shape differs from the reference trajectory.
    ShapeMismatch {
        /// Series index (order of the vector files).
        series: usize,
        /// Reference frame count.
        expected_frames: usize,
        /// Series frame count.
        found_frames: usize,
        /// Reference atom count.
        expected_atoms: usize,
        /// Series atom count.
        found_atoms: usize,
    },
    /// Scalar value count differs from the reference atom count.
    ScalarCountMismatch {
        /// Reference atom count.
        expected: usize,
        /// Number of scalar values read.
        found: usize,
    },
    /// Requested frame index past the end of the trajectory.
    FrameOutOfRange {
        /// Requested frame.
        frame: usize,
        /// Number of frames available.
        frames: usize,
    },
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(io::Error),
}

impl fmt::Display for ForcevisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileUnreadable { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            Self::Parse {
                path,
                line,
                message,
            } => write!(f, "{path}:{line}: {message}"),
            Self::InconsistentFrame {
                frame,
                expected,
                found,
            } => write!(
                f,
                "frame {frame} has {found} atoms, expected {expected}"
            ),
            Self::ShapeMismatch {
                series,
                expected_frames,
                found_frames,
                expected_atoms,
                found_atoms,
            } => write!(
                f,
                "vector series {series} has {found_frames} frames x \
                 {found_atoms} atoms, reference has {expected_frames} frames \
                 x {expected_atoms} atoms"
            ),
            Self::ScalarCountMismatch { expected, found } => write!(
                f,
                "read {found} scalar values, reference has {expected} atoms"
            ),
            Self::FrameOutOfRange { frame, frames } => {
                write!(f, "frame {frame} out of range ({frames} frames)")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ForcevisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileUnreadable { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl ForcevisError {
    /// Classify a failed line read: undecodable text is malformed content,
    /// anything else is an I/O failure.
    pub(crate) fn line_read(label: &str, line: usize, e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::InvalidData {
            Self::Parse {
                path: label.to_owned(),
                line,
                message: format!("undecodable text: {e}"),
            }
        } else {
            Self::Io(e)
        }
    }
}

impl From<io::Error> for ForcevisError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_message_names_both_shapes() {
        let err = ForcevisError::ShapeMismatch {
            series: 1,
            expected_frames: 2,
            found_frames: 2,
            expected_atoms: 2,
            found_atoms: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("series 1"));
        assert!(msg.contains("2 frames x 3 atoms"));
        assert!(msg.contains("2 frames x 2 atoms"));
    }

    #[test]
    fn frame_out_of_range_message() {
        let err = ForcevisError::FrameOutOfRange {
            frame: 7,
            frames: 3,
        };
        assert_eq!(err.to_string(), "frame 7 out of range (3 frames)");
    }

    #[test]
    fn invalid_data_reads_are_parse_errors() {
        let bad = io::Error::new(io::ErrorKind::InvalidData, "not utf-8");
        assert!(matches!(
            ForcevisError::line_read("f.xyz", 4, bad),
            ForcevisError::Parse { line: 4, .. }
        ));
        let other = io::Error::new(io::ErrorKind::BrokenPipe, "gone");
        assert!(matches!(
            ForcevisError::line_read("f.xyz", 4, other),
            ForcevisError::Io(_)
        ));
    }

    #[test]
    fn file_unreadable_exposes_source() {
        use std::error::Error;

        let err = ForcevisError::FileUnreadable {
            path: PathBuf::from("missing.xyz"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("cannot read missing.xyz"));
    }
}
