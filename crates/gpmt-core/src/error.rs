use std::fmt;

/// Result type for log collection operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can abort a collection run
#[derive(Debug)]
pub enum Error {
    /// Every log-directory source was exhausted without a usable path
    UnresolvedLogDir,

    /// Archive creation, file read, or archive write failed
    Io(std::io::Error),

    /// Directory traversal failed partway
    Walk(walkdir::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnresolvedLogDir => write!(
                f,
                "unable to determine log directory: database query failed and \
                 MASTER_DATA_DIRECTORY environment variable not set"
            ),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Walk(err) => write!(f, "failed to walk log directory: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Walk(err) => Some(err),
            Error::UnresolvedLogDir => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::Walk(err)
    }
}
