use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything that can go wrong while managing the `.gobrew` tree.
///
/// Each operation fails fast: the first error ends it, after whatever rollback
/// the operation documents. The CLI decides how to present it.
#[derive(Debug, Error)]
pub enum GobrewError {
    #[error("no version provided")]
    MissingVersion,

    #[error(
        "version {0} you are trying to remove is your current version, \
         use a different version first before uninstalling it"
    )]
    UninstallCurrent(String),

    #[error("version {0} is not installed")]
    NotInstalled(String),

    #[error("downloading failed, please check connectivity to url: {url}")]
    Download {
        url: String,
        #[source]
        source: Box<GobrewError>,
    },

    #[error("untar failed, please check if version exists from url: {url}")]
    Extract {
        url: String,
        #[source]
        source: Box<GobrewError>,
    },

    #[error("archive for version {0} did not contain a go directory")]
    IncompleteArchive(String),

    #[error("symbolic link {} failed", path.display())]
    Link {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("current links do not agree after switching to {expected} (bin: {bin:?}, go: {go:?})")]
    InconsistentLinks {
        expected: String,
        bin: Option<String>,
        go: Option<String>,
    },

    #[error("I/O error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} while fetching {url}")]
    HttpStatus { url: String, status: u16 },

    #[error(transparent)]
    Regex(#[from] regex::Error),

    #[error("listing remote versions failed: {0}")]
    RemoteListing(String),

    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("invalid config file {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl GobrewError {
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        GobrewError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GobrewError>;
