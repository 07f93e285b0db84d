use std::path::PathBuf;

/// Errors raised at the edges of the page: configuration and descriptor parsing.
///
/// The page itself never fails. Missing elements, unknown anchors and the like
/// are ignored where they happen.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unknown section '{0}'")]
    UnknownSection(String),

    #[error("unknown toggle action '{0}'")]
    UnknownAction(String),

    #[error("toggle actions need 4 entries, got {0}")]
    ToggleArity(usize),

    #[error("invalid trigger position '{0}'")]
    InvalidPosition(String),

    #[error("unknown ease '{0}'")]
    UnknownEase(String),
}

pub type Result<T> = std::result::Result<T, Error>;
