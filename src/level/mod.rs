//! Level persistence
//!
//! - `format`: plain-text grid serialization
//! - `store`: path derivation, id allocation, load/save against a directory
//! - `error`: error type for both

pub mod error;
pub mod format;
pub mod store;

pub use error::LevelError;
pub use store::LevelStore;

use std::fmt;

/// Level identifier: a non-empty string of decimal digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LevelId(String);

impl LevelId {
    /// Validate user input as a level id
    pub fn parse(text: &str) -> Option<Self> {
        if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
            Some(LevelId(text.to_string()))
        } else {
            None
        }
    }

    pub fn from_number(n: u32) -> Self {
        LevelId(n.to_string())
    }

    #[allow(dead_code)] // Display covers the runtime uses
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
