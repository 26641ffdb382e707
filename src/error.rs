use std::fmt;

/// Error types for the ant simulation
#[derive(Debug)]
pub enum LangtonError {
    /// Writing a frame or event failed
    IoError(std::io::Error),
    /// Grid size must be at least one cell
    InvalidGridSize(usize),
}

impl fmt::Display for LangtonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LangtonError::IoError(err) => write!(f, "IO error: {}", err),
            LangtonError::InvalidGridSize(size) => {
                write!(f, "Invalid grid size: {} (must be positive)", size)
            }
        }
    }
}

impl std::error::Error for LangtonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LangtonError::IoError(err) => Some(err),
            LangtonError::InvalidGridSize(_) => None,
        }
    }
}

impl From<std::io::Error> for LangtonError {
    fn from(err: std::io::Error) -> Self {
        LangtonError::IoError(err)
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, LangtonError>;
