//! Neighbor bitmask computation and canonicalization

use terra_core::{TileMap, TileType};

/// Neighbor direction flags for bitmask calculation
pub mod neighbors {
    pub const N: u8 = 0b0000_0001; // North
    pub const NE: u8 = 0b0000_0010; // Northeast (corner)
    pub const E: u8 = 0b0000_0100; // East
    pub const W: u8 = 0b0000_1000; // West
    pub const SE: u8 = 0b0001_0000; // Southeast (corner)
    pub const S: u8 = 0b0010_0000; // South
    pub const SW: u8 = 0b0100_0000; // Southwest (corner)
    pub const NW: u8 = 0b1000_0000; // Northwest (corner)
}

/// The 8 Moore neighbor offsets with their bit weights
///
/// Screen coordinates: +y is down, so north is `(0, -1)`.
pub const NEIGHBOR_OFFSETS: [(i32, i32, u8); 8] = [
    (0, -1, neighbors::N),
    (1, -1, neighbors::NE),
    (1, 0, neighbors::E),
    (1, 1, neighbors::SE),
    (0, 1, neighbors::S),
    (-1, 1, neighbors::SW),
    (-1, 0, neighbors::W),
    (-1, -1, neighbors::NW),
];

/// Calculate the neighbor bitmask for one transition pair at a tile
///
/// A bit is set when the neighbor at that offset exists and is of
/// `secondary` type. Missing neighbors contribute nothing, so tiles at the
/// edge of the loaded area lean toward isolated art instead of showing a
/// spurious border.
///
/// `primary` constrains which pair configs get evaluated at the caller
/// level; it is threaded through here so a bitmask can never be reused
/// across pairs by accident.
pub fn compute_bitmask(
    map: &TileMap,
    x: i32,
    y: i32,
    primary: TileType,
    secondary: TileType,
) -> u8 {
    debug_assert_ne!(
        primary, secondary,
        "a transition pair cannot target its own type"
    );

    let mut bitmask = 0u8;
    for (dx, dy, bit) in NEIGHBOR_OFFSETS {
        if map.tile_type_at(x + dx, y + dy) == Some(secondary) {
            bitmask |= bit;
        }
    }
    bitmask
}

/// Clear diagonal bits that lack both supporting cardinal bits
///
/// A diagonal transition with no matching edge transition is not
/// representable in the 48-cell sheet, so raw masks sampled from irregular
/// terrain are collapsed onto the canonical set before lookup.
pub fn canonicalize(bitmask: u8) -> u8 {
    use neighbors::*;

    let mut result = bitmask;

    // NW corner requires N and W
    if (bitmask & (N | W)) != (N | W) {
        result &= !NW;
    }
    // NE corner requires N and E
    if (bitmask & (N | E)) != (N | E) {
        result &= !NE;
    }
    // SE corner requires S and E
    if (bitmask & (S | E)) != (S | E) {
        result &= !SE;
    }
    // SW corner requires S and W
    if (bitmask & (S | W)) != (S | W) {
        result &= !SW;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use terra_core::Tile;

    fn grass_at(map: &mut TileMap, x: i32, y: i32) {
        map.insert(x, y, Tile::new(TileType::Grass));
    }

    fn dirt_at(map: &mut TileMap, x: i32, y: i32) {
        map.insert(x, y, Tile::new(TileType::Dirt));
    }

    #[test]
    fn test_isolated_tile_has_zero_mask() {
        let mut map = TileMap::new();
        grass_at(&mut map, 0, 0);
        assert_eq!(
            compute_bitmask(&map, 0, 0, TileType::Grass, TileType::Dirt),
            0
        );
    }

    #[test]
    fn test_same_type_neighbors_have_zero_mask() {
        let mut map = TileMap::new();
        for dy in -1..=1 {
            for dx in -1..=1 {
                grass_at(&mut map, dx, dy);
            }
        }
        assert_eq!(
            compute_bitmask(&map, 0, 0, TileType::Grass, TileType::Dirt),
            0
        );
    }

    #[test]
    fn test_cardinal_neighbor_bits() {
        let mut map = TileMap::new();
        grass_at(&mut map, 0, 0);
        dirt_at(&mut map, 0, -1); // north
        dirt_at(&mut map, 1, 0); // east

        assert_eq!(
            compute_bitmask(&map, 0, 0, TileType::Grass, TileType::Dirt),
            neighbors::N | neighbors::E
        );
    }

    #[test]
    fn test_full_surround_is_255() {
        let mut map = TileMap::new();
        grass_at(&mut map, 0, 0);
        for (dx, dy, _) in NEIGHBOR_OFFSETS {
            dirt_at(&mut map, dx, dy);
        }
        assert_eq!(
            compute_bitmask(&map, 0, 0, TileType::Grass, TileType::Dirt),
            255
        );
    }

    #[test]
    fn test_unrelated_type_contributes_nothing() {
        let mut map = TileMap::new();
        grass_at(&mut map, 0, 0);
        dirt_at(&mut map, 0, -1);
        map.insert(0, 1, Tile::new(TileType::Sea)); // neither primary nor secondary

        assert_eq!(
            compute_bitmask(&map, 0, 0, TileType::Grass, TileType::Dirt),
            neighbors::N
        );
    }

    #[test]
    fn test_only_moore_neighbors_affect_mask() {
        let mut map = TileMap::new();
        grass_at(&mut map, 0, 0);
        dirt_at(&mut map, 0, -1);
        let before = compute_bitmask(&map, 0, 0, TileType::Grass, TileType::Dirt);

        // Tiles outside the Moore neighborhood must not change the result.
        dirt_at(&mut map, 2, 0);
        dirt_at(&mut map, -5, 9);
        dirt_at(&mut map, 0, -2);
        let after = compute_bitmask(&map, 0, 0, TileType::Grass, TileType::Dirt);

        assert_eq!(before, after);
    }

    #[test]
    fn test_canonicalize_clears_orphan_diagonals() {
        use neighbors::*;

        // Lone NE with neither N nor E: cleared.
        assert_eq!(canonicalize(NE), 0);
        // NE with only N: still cleared.
        assert_eq!(canonicalize(N | NE), N);
        // NE with both supports: kept.
        assert_eq!(canonicalize(N | NE | E), N | NE | E);

        // Symmetric for the other three corners.
        assert_eq!(canonicalize(SE), 0);
        assert_eq!(canonicalize(S | E | SE), S | E | SE);
        assert_eq!(canonicalize(SW), 0);
        assert_eq!(canonicalize(S | W | SW), S | W | SW);
        assert_eq!(canonicalize(NW), 0);
        assert_eq!(canonicalize(N | W | NW), N | W | NW);
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        for mask in 0..=255u8 {
            let once = canonicalize(mask);
            assert_eq!(canonicalize(once), once, "mask {mask}");
        }
    }

    #[test]
    fn test_canonical_diagonals_always_supported() {
        use neighbors::*;

        for mask in 0..=255u8 {
            let canonical = canonicalize(mask);
            if canonical & NE != 0 {
                assert_eq!(canonical & (N | E), N | E, "mask {mask}");
            }
            if canonical & SE != 0 {
                assert_eq!(canonical & (S | E), S | E, "mask {mask}");
            }
            if canonical & SW != 0 {
                assert_eq!(canonical & (S | W), S | W, "mask {mask}");
            }
            if canonical & NW != 0 {
                assert_eq!(canonical & (N | W), N | W, "mask {mask}");
            }
        }
    }

    #[test]
    fn test_full_mask_is_already_canonical() {
        assert_eq!(canonicalize(255), 255);
    }
}
