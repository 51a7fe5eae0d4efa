//! PNG export of board snapshots with figure outlines

use crate::io::configuration::{
    BLACK_CELL_RGBA, EMPTY_CELL_RGBA, MAX_CELL_SIZE, OUTLINE_RGBA, WHITE_CELL_RGBA,
};
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::io::render::{BoardSnapshot, CellView};
use crate::spatial::Color;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Render a snapshot into an image, `cell_size` pixels per board cell
///
/// Cell borders are drawn in the outline color wherever the neighbouring
/// cell belongs to a different placement or lies outside the board.
///
/// # Errors
///
/// Returns `InvalidParameter` if `cell_size` is zero or above the maximum
pub fn render_board_image(snapshot: &BoardSnapshot, cell_size: u32) -> Result<RgbaImage> {
    if cell_size == 0 || cell_size > MAX_CELL_SIZE {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &format!("must be between 1 and {MAX_CELL_SIZE}"),
        ));
    }

    let width = snapshot.width();
    let side = width as u32 * cell_size;
    let mut img = ImageBuffer::new(side, side);

    for row in 0..width {
        for col in 0..width {
            let cell = snapshot.cell_at(row, col);
            let owner = cell.map(|c| c.sequence_number);

            // Neighbour owners: up, down, left, right
            let differs = |near_row: Option<usize>, near_col: Option<usize>| -> bool {
                match (near_row, near_col) {
                    (Some(r), Some(c)) if r < width && c < width => {
                        snapshot.cell_at(r, c).map(|n| n.sequence_number) != owner
                    }
                    _ => true,
                }
            };
            let border_top = differs(row.checked_sub(1), Some(col));
            let border_bottom = differs(Some(row + 1), Some(col));
            let border_left = differs(Some(row), col.checked_sub(1));
            let border_right = differs(Some(row), Some(col + 1));

            let fill = fill_color(cell);
            let origin_x = col as u32 * cell_size;
            let origin_y = row as u32 * cell_size;
            for dy in 0..cell_size {
                for dx in 0..cell_size {
                    let on_border = (border_top && dy == 0)
                        || (border_bottom && dy == cell_size - 1)
                        || (border_left && dx == 0)
                        || (border_right && dx == cell_size - 1);
                    let rgba = if on_border && owner.is_some() {
                        OUTLINE_RGBA
                    } else {
                        fill
                    };
                    img.put_pixel(origin_x + dx, origin_y + dy, Rgba(rgba));
                }
            }
        }
    }

    Ok(img)
}

const fn fill_color(cell: Option<CellView>) -> [u8; 4] {
    match cell {
        Some(CellView {
            color: Color::Black,
            ..
        }) => BLACK_CELL_RGBA,
        Some(CellView {
            color: Color::White,
            ..
        }) => WHITE_CELL_RGBA,
        None => EMPTY_CELL_RGBA,
    }
}

/// Export a snapshot as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `cell_size` is out of range
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(snapshot: &BoardSnapshot, cell_size: u32, output_path: &Path) -> Result<()> {
    let img = render_board_image(snapshot, cell_size)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
