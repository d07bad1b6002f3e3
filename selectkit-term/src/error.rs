use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TermError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] selectkit::ConfigError),

    #[error("cannot open {path}: {source}")]
    File { path: PathBuf, source: io::Error },

    #[error("invalid options file {path}: {source}")]
    Options {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("no options given")]
    NoOptions,

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
