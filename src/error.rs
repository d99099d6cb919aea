use std::{
    backtrace::{self, Backtrace},
    fmt, io,
    path::PathBuf,
};

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("failed to read '{}'", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    /// The asset name would resolve to a location outside the asset root.
    #[error("asset name '{0}' escapes the asset root")]
    Traversal(String),
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub backtrace: backtrace::Backtrace,
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ErrorKind::Io {
            path: path.into(),
            source,
        }
        .into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

impl<T: Into<ErrorKind>> From<T> for Error {
    fn from(value: T) -> Self {
        Self {
            kind: value.into(),
            backtrace: Backtrace::capture(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
