//! The [`Error`] type returned by all fallible operations of `classgen`.

use std::{
    fmt::Display,
    io,
    num::ParseIntError,
    path::{Path, PathBuf},
    sync::Arc,
};

#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    Usage {
        reason: String,
    },
    InvalidObjectSize {
        value: String,
        source: ParseIntError,
    },
    TemplateNotFound {
        path: PathBuf,
        source: Arc<io::Error>,
    },
    TemplateIoError {
        message: String,
    },
    OutputIoError {
        message: String,
    },
}

impl Error {
    pub(crate) fn usage(reason: impl Into<String>) -> Error {
        Error::Usage {
            reason: reason.into(),
        }
    }

    pub(crate) fn template_io_error(path: &Path, error: io::Error) -> Error {
        if error.kind() == io::ErrorKind::NotFound {
            Error::TemplateNotFound {
                path: path.to_owned(),
                source: Arc::new(error),
            }
        } else {
            Error::TemplateIoError {
                message: format!("{}: {}", path.display(), error),
            }
        }
    }

    pub(crate) fn output_io_error(path: &Path, error: io::Error) -> Error {
        Error::OutputIoError {
            message: format!("{}: {}", path.display(), error),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Usage { reason } => write!(f, "{}", reason),
            Error::InvalidObjectSize { value, source } => {
                write!(f, "invalid object size {:?}: {}", value, source)
            }
            Error::TemplateNotFound { path, .. } => {
                write!(f, "template file not found: {}", path.display())
            }
            Error::TemplateIoError { message } | Error::OutputIoError { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidObjectSize { source, .. } => Some(source),
            Error::TemplateNotFound { source, .. } => Some(&**source),
            Error::Usage { .. } | Error::TemplateIoError { .. } | Error::OutputIoError { .. } => {
                None
            }
        }
    }
}
