use thiserror::Error;

/// Errors that can occur while loading or saving a level
#[derive(Error, Debug)]
pub enum LevelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A token that is not a decimal tile id
    #[error("line {line}: '{token}' is not a tile id")]
    Parse { line: usize, token: String },

    /// A row whose length differs from the first row
    #[error("line {line}: expected {expected} tiles, found {found}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("level contains no tiles")]
    Empty,
}
