//! Per-tile transition enumeration

use crate::bitmask::{compute_bitmask, NEIGHBOR_OFFSETS};
use crate::config::AutotileRegistry;
use crate::lookup::resolve_cell;
use terra_core::{index_to_pixel_rect, PixelRect, TileMap, TileType};

/// One transition overlay to blit for a tile
///
/// Carries everything the renderer needs: which pair (and therefore which
/// sheet image), the raw bitmask, the resolved sheet cell, and the pixel
/// rectangle within the sheet.
#[derive(Debug, Clone)]
pub struct TileTransition<'a> {
    pub pair: &'a crate::config::AutotilePairConfig,
    pub bitmask: u8,
    pub cell: u8,
    pub rect: PixelRect,
}

/// Enumerate every applicable transition overlay for one tile
///
/// Returns an empty list when no tile exists at `(x, y)` or when every
/// existing neighbor shares the tile's type, signaling the caller to render
/// plain base art. Results follow registry order; stacking priority among
/// simultaneous transitions is the renderer's decision.
pub fn transitions_at<'a>(
    map: &TileMap,
    x: i32,
    y: i32,
    registry: &'a AutotileRegistry,
) -> Vec<TileTransition<'a>> {
    let Some(tile_type) = map.tile_type_at(x, y) else {
        return Vec::new();
    };

    let mut result = Vec::new();
    for pair in registry.pairs_for(tile_type) {
        if pair.suppressed {
            continue;
        }

        let bitmask = compute_bitmask(map, x, y, pair.primary, pair.secondary);
        if bitmask == 0 {
            continue;
        }

        // A nonzero mask alone is not trusted: re-check the neighbors
        // directly so a bitmask/coordinate mismatch upstream cannot emit a
        // transition for a neighbor that is not actually there.
        if !has_secondary_neighbor(map, x, y, pair.secondary) {
            continue;
        }

        let cell = resolve_cell(bitmask, &pair.overrides);
        let rect = index_to_pixel_rect(cell, &pair.image);
        result.push(TileTransition {
            pair,
            bitmask,
            cell,
            rect,
        });
    }
    result
}

fn has_secondary_neighbor(map: &TileMap, x: i32, y: i32, secondary: TileType) -> bool {
    NEIGHBOR_OFFSETS
        .iter()
        .any(|&(dx, dy, _)| map.tile_type_at(x + dx, y + dy) == Some(secondary))
}
