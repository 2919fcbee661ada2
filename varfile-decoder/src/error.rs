//! Decoder errors.

use std::path::PathBuf;
use thiserror::Error;
use varfile_common::DiagnosticReport;

#[derive(Debug, Error)]
pub enum VarfileError {
    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Syntax(#[from] DiagnosticReport),

    #[error("invalid variable {0:?}, must be key=value")]
    InvalidAssignment(String),

    #[error("cannot encode variable {key:?}: {reason}")]
    Unencodable { key: String, reason: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VarfileError>;
