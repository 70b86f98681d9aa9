use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which side of a file operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    Read,
    Write,
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOp::Read => write!(f, "read"),
            FileOp::Write => write!(f, "write"),
        }
    }
}

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Product with ID {0} not found")]
    NotFound(u32),

    #[error("Failed to {op} file: {}", .path.display())]
    FileOperationFailed {
        op: FileOp,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No product ids left to assign")]
    IdsExhausted,

    #[error("Invalid product: {0}")]
    Invalid(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl InventoryError {
    pub(crate) fn file_op(op: FileOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InventoryError::FileOperationFailed {
            op,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
