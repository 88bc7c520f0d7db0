use std::path::PathBuf;

/// Every fatal condition of the installer and the launcher.
///
/// A failed symbolic link is deliberately absent: it is recovered by the copy
/// fallback and travels inside [`crate::InstallOutcome::Copied`] instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported platform: {os}/{arch}")]
    UnsupportedPlatform { os: String, arch: String },

    #[error("prebuilt binary not found at {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not locate the running executable: {0}")]
    CurrentExe(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
