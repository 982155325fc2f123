use thiserror::Error;

#[derive(Error, Debug)]
pub enum TexgenError {
    #[error("Incomplete tree: {empty} empty slot(s) remain")]
    IncompleteTree { empty: usize },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TexgenError>;
