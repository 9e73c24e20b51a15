//! Plain-text level format
//!
//! One line per grid row, tile ids as decimal integers separated by a
//! single space, rows separated by `\n`, no header and no trailing newline.
//!
//! ```text
//! 1 1 1
//! 1 2 1
//! 1 1 1
//! ```

use super::error::LevelError;
use crate::tile::{Grid, TileId};

pub fn serialize(grid: &Grid) -> String {
    grid.rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|tile| tile.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a level
///
/// Only checks that every token is an integer and that the rows line up;
/// tile ids are not range-checked. A trailing newline is accepted.
pub fn deserialize(text: &str) -> Result<Grid, LevelError> {
    let mut rows: Vec<Vec<TileId>> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<TileId>().map_err(|_| LevelError::Parse {
                    line: line_number,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(LevelError::Ragged {
                    line: line_number,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }

    Grid::from_rows(rows).ok_or(LevelError::Empty)
}
