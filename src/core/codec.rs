//! Reading and writing boards in the level-file format: one text row per board row,
//! one glyph per cell, each row terminated by a newline. There is no header, so the
//! expected dimensions are supplied by the caller.

use std::fs;
use std::path::Path;

use tracing::{info, instrument};

use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::{Board, Cell};
use crate::error::BoardError;

#[cfg(test)]
pub fn parse_board(s: &str, bounds: BoundsOriginRoot) -> Result<Board, BoardError> {
    parse_board_bytes(s.as_bytes(), bounds)
}

/// Parses exactly `bounds.rows()` rows of exactly `bounds.cols()` glyphs.
/// Rows may end in `\n` or `\r\n`; the final terminator is optional. Anything but blank
/// lines after the last row is rejected.
pub fn parse_board_bytes(bytes: &[u8], bounds: BoundsOriginRoot) -> Result<Board, BoardError> {
    let rows = bounds.rows() as usize;
    let cols = bounds.cols() as usize;
    let mut cells = Vec::with_capacity(bounds.area() as usize);

    if bytes.is_empty() {
        return Err(BoardError::format(1, format!("expected {} rows, found 0", rows)));
    }
    // A trailing terminator ends the last row rather than starting an empty one.
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let mut lines = body.split(|&b| b == b'\n').map(strip_cr);

    for row in 0..rows {
        let line_no = row + 1;
        let Some(line) = lines.next() else {
            return Err(BoardError::format(
                line_no,
                format!("expected {} rows, found {}", rows, row),
            ));
        };
        if line.len() != cols {
            return Err(BoardError::format(
                line_no,
                format!("expected {} columns, found {}", cols, line.len()),
            ));
        }
        for (col, &glyph) in line.iter().enumerate() {
            let cell = Cell::from_glyph(glyph).ok_or_else(|| {
                BoardError::format(
                    line_no,
                    format!("unknown glyph {:?} in column {}", glyph as char, col + 1),
                )
            })?;
            cells.push(cell);
        }
    }

    if let Some(extra) = lines.position(|line| !line.iter().all(u8::is_ascii_whitespace)) {
        return Err(BoardError::format(
            rows + extra + 1,
            format!("unexpected content after row {}", rows),
        ));
    }

    BoundedGrid::from_cells(bounds, cells)
        .ok_or_else(|| BoardError::format(rows, "grid does not fill its bounds"))
}

fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Renders the board in level-file format, each row followed by `\n`.
pub fn board_to_string(board: &Board) -> String {
    let mut result = String::with_capacity((board.size().area() + board.size().rows()) as usize);
    for row in board.rows() {
        for c in row {
            result.push(c.glyph());
        }
        result.push('\n');
    }
    result
}

#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_board(path: &Path, bounds: BoundsOriginRoot) -> Result<Board, BoardError> {
    let bytes = fs::read(path).map_err(|source| BoardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let board = parse_board_bytes(&bytes, bounds)?;
    info!(rows = bounds.rows(), cols = bounds.cols(), "level loaded");
    Ok(board)
}

/// Writes the board to `path`, replacing any existing content.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn save_board(board: &Board, path: &Path) -> Result<(), BoardError> {
    fs::write(path, board_to_string(board)).map_err(|source| BoardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("level saved");
    Ok(())
}
