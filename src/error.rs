//! Crate-level error types.

use std::fmt;

/// Errors produced by the volview crate.
///
/// The trackball itself is infallible; errors come from the host side:
/// options I/O, argument validation and the window event loop.
#[derive(Debug)]
pub enum VolviewError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure or an out-of-range value.
    OptionsParse(String),
    /// A viewport dimension was zero.
    InvalidViewport {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for VolviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidViewport { width, height } => write!(
                f,
                "invalid viewport {width}x{height}: both dimensions must be \
                 positive"
            ),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for VolviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VolviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_mentions_dimensions() {
        let err = VolviewError::InvalidViewport {
            width: 0,
            height: 600,
        };
        assert_eq!(
            err.to_string(),
            "invalid viewport 0x600: both dimensions must be positive"
        );
    }

    #[test]
    fn io_errors_keep_their_source() {
        let err: VolviewError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
        assert!(VolviewError::Viewer("closed".into()).source().is_none());
    }
}
