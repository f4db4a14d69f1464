use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StencilError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to load snippet {}: {message}", path.display())]
    Load { path: PathBuf, message: String },

    #[error("template error in {}: {source}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    #[error("unknown variable: {0}")]
    UnknownVariable(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, StencilError>;
