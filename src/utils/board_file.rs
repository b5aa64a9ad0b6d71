//! Position file I/O for the command-line driver.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::errors::{JumpyError, JumpyResult};
use crate::game_state::board::Board;
use crate::utils::board_codec::{decode, validate_board_text};

/// Read the first whitespace-delimited token of `path` and decode it.
///
/// A token that is not a clean 16-character board is logged and decoded
/// leniently.
pub fn read_board_file(path: &Path) -> JumpyResult<Board> {
    let contents = fs::read_to_string(path).map_err(|source| JumpyError::ReadBoard {
        path: path.to_path_buf(),
        source,
    })?;

    let token = contents
        .split_whitespace()
        .next()
        .ok_or_else(|| JumpyError::MissingBoardToken {
            path: path.to_path_buf(),
        })?;

    if let Err(issue) = validate_board_text(token) {
        warn!(path = %path.display(), token, "{issue}; decoding leniently");
    }

    Ok(decode(token))
}

pub fn write_board_file(path: &Path, board: &Board) -> JumpyResult<()> {
    fs::write(path, board.to_text()).map_err(|source| JumpyError::WriteBoard {
        path: path.to_path_buf(),
        source,
    })
}
