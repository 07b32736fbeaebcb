//! Core data structures for the terra terrain engine
//!
//! This crate provides the fundamental types shared by terrain consumers:
//! - `TileType` - Closed enumeration of terrain kinds
//! - `Tile` / `TileMap` - Sparse world grid keyed by integer coordinates
//! - `TilesetImage` - Opaque handle to a transition tile-sheet
//! - `PixelRect` - Pixel rectangle within a tile-sheet, with index mapping

mod tile;
mod tileset;

pub use tile::{Tile, TileMap, TileType};
pub use tileset::{
    index_to_pixel_rect, pixel_rect_to_index, PixelRect, TilesetImage, SHEET_CELLS, SHEET_COLUMNS,
    SHEET_ROWS,
};
