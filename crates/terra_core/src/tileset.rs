//! Tile-sheet handles and cell geometry
//!
//! Transition tile-sheets use a fixed 6-column by 8-row layout (48 cells)
//! regardless of any advisory tile size carried alongside the image. Cell
//! dimensions are derived from the sheet's actual pixel dimensions, so a
//! sheet whose width is not divisible by 6 still tiles exactly: boundary
//! positions are floored and each cell runs to the next boundary.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Columns in a transition tile-sheet
pub const SHEET_COLUMNS: u32 = 6;
/// Rows in a transition tile-sheet
pub const SHEET_ROWS: u32 = 8;
/// Total cells in a transition tile-sheet
pub const SHEET_CELLS: u32 = SHEET_COLUMNS * SHEET_ROWS;

/// Opaque handle to a tile-sheet image
///
/// Image loading and decoding belong to the asset-management collaborator;
/// this type only carries identity and pixel dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TilesetImage {
    pub id: Uuid,
    pub name: String,
    /// Path to the image file (relative to the assets directory)
    pub path: String,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

impl TilesetImage {
    pub fn new(name: String, path: String, pixel_width: u32, pixel_height: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            path,
            pixel_width,
            pixel_height,
        }
    }
}

/// Pixel rectangle within a tile-sheet image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Map a sheet cell index to its pixel rectangle
///
/// Indices outside `[0, 47]` are clamped into range, never rejected: the
/// renderer must always receive a blittable rectangle.
pub fn index_to_pixel_rect(index: u8, image: &TilesetImage) -> PixelRect {
    let index = (index as u32).min(SHEET_CELLS - 1);
    let col = index % SHEET_COLUMNS;
    let row = index / SHEET_COLUMNS;

    let x0 = col * image.pixel_width / SHEET_COLUMNS;
    let x1 = (col + 1) * image.pixel_width / SHEET_COLUMNS;
    let y0 = row * image.pixel_height / SHEET_ROWS;
    let y1 = (row + 1) * image.pixel_height / SHEET_ROWS;

    PixelRect {
        x: x0,
        y: y0,
        width: x1 - x0,
        height: y1 - y0,
    }
}

/// Map a pixel rectangle back to its sheet cell index
///
/// Inverse of [`index_to_pixel_rect`] for any rectangle that function can
/// produce on a sheet at least 6x8 pixels. Out-of-sheet rectangles clamp
/// to the nearest cell.
pub fn pixel_rect_to_index(rect: &PixelRect, image: &TilesetImage) -> u8 {
    // Boundary positions are floor(col * width / 6), so the smallest x that
    // rounds back up past every earlier boundary is (x * 6 + 5) / width.
    // Widened to u64: the multiply must not overflow for any u32 coordinate.
    let col = if image.pixel_width == 0 {
        0
    } else {
        ((rect.x as u64 * SHEET_COLUMNS as u64 + (SHEET_COLUMNS as u64 - 1))
            / image.pixel_width as u64)
            .min(SHEET_COLUMNS as u64 - 1) as u32
    };
    let row = if image.pixel_height == 0 {
        0
    } else {
        ((rect.y as u64 * SHEET_ROWS as u64 + (SHEET_ROWS as u64 - 1))
            / image.pixel_height as u64)
            .min(SHEET_ROWS as u64 - 1) as u32
    };
    (row * SHEET_COLUMNS + col) as u8
}
