use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    DirectoryReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    FileWriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    FileDeleteError {
        path: PathBuf,
        source: std::io::Error,
    },
    DestinationMissing {
        path: PathBuf,
    },
    TomlParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    UnknownLocale {
        locale: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DirectoryReadError { path, source } => {
                write!(
                    f,
                    "failed to read fragment directory: {} ({})",
                    path.display(),
                    source
                )
            }
            Error::FileReadError { path, source } => {
                write!(f, "failed to read file: {} ({})", path.display(), source)
            }
            Error::FileWriteError { path, source } => {
                write!(f, "failed to write file: {} ({})", path.display(), source)
            }
            Error::FileDeleteError { path, source } => {
                write!(f, "failed to delete file: {} ({})", path.display(), source)
            }
            Error::DestinationMissing { path } => {
                write!(f, "destination changelog not found: {}", path.display())
            }
            Error::TomlParseError { path, source } => {
                write!(
                    f,
                    "failed to parse toml file: {} ({})",
                    path.display(),
                    source
                )
            }
            Error::UnknownLocale { locale } => {
                write!(f, "unknown locale: {}", locale)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DirectoryReadError { source, .. } => Some(source),
            Error::FileReadError { source, .. } => Some(source),
            Error::FileWriteError { source, .. } => Some(source),
            Error::FileDeleteError { source, .. } => Some(source),
            Error::TomlParseError { source, .. } => Some(source),
            _ => None,
        }
    }
}

