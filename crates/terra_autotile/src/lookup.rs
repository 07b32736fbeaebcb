//! Canonical mask lookup table and per-tileset override tables

use crate::bitmask::canonicalize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sheet cell drawn when a tile has no transition art (pure primary type)
pub const ISOLATED_CELL: u8 = 0;

/// Canonical bitmask -> sheet cell, for all 47 canonical patterns
///
/// Canonicalization guarantees every diagonal bit is supported by both of
/// its cardinal bits, which collapses the 256 raw masks onto exactly these
/// 47 patterns. They occupy cells 0..=46 of the 6x8 sheet in ascending
/// mask order, row-major; cell 47 is spare. Sorted by mask for binary
/// search.
///
/// Bit weights: N=1, NE=2, E=4, W=8, SE=16, S=32, SW=64, NW=128.
const CANONICAL_CELLS: [(u8, u8); 47] = [
    (0, 0),     // isolated
    (1, 1),     // N
    (4, 2),     // E
    (5, 3),     // N+E
    (7, 4),     // N+E with NE corner
    (8, 5),     // W
    (9, 6),     // N+W
    (12, 7),    // E+W
    (13, 8),    // N+E+W
    (15, 9),    // N+E+W with NE corner
    (32, 10),   // S
    (33, 11),   // N+S
    (36, 12),   // E+S
    (37, 13),   // N+E+S
    (39, 14),   // N+E+S with NE corner
    (40, 15),   // W+S
    (41, 16),   // N+W+S
    (44, 17),   // E+W+S
    (45, 18),   // N+E+W+S (bare cross)
    (47, 19),   // cross with NE corner
    (52, 20),   // E+S with SE corner
    (53, 21),   // N+E+S with SE corner
    (55, 22),   // N+E+S with NE+SE corners
    (60, 23),   // E+W+S with SE corner
    (61, 24),   // cross with SE corner
    (63, 25),   // cross with NE+SE corners
    (104, 26),  // W+S with SW corner
    (105, 27),  // N+W+S with SW corner
    (108, 28),  // E+W+S with SW corner
    (109, 29),  // cross with SW corner
    (111, 30),  // cross with NE+SW corners
    (124, 31),  // E+W+S with SE+SW corners
    (125, 32),  // cross with SE+SW corners
    (127, 33),  // cross with NE+SE+SW corners
    (137, 34),  // N+W with NW corner
    (141, 35),  // N+E+W with NW corner
    (143, 36),  // N+E+W with NE+NW corners
    (169, 37),  // N+W+S with NW corner
    (173, 38),  // cross with NW corner
    (175, 39),  // cross with NE+NW corners
    (189, 40),  // cross with SE+NW corners
    (191, 41),  // cross with NE+SE+NW corners
    (233, 42),  // N+W+S with SW+NW corners
    (237, 43),  // cross with SW+NW corners
    (239, 44),  // cross with NE+SW+NW corners
    (253, 45),  // cross with SE+SW+NW corners
    (255, 46),  // four-way cross, all corners
];

/// Look up the sheet cell for an already-canonical mask
///
/// Masks outside the canonical set (possible when callers pass raw masks
/// directly) fall back to the isolated cell.
pub fn canonical_cell(canonical_mask: u8) -> u8 {
    match CANONICAL_CELLS.binary_search_by_key(&canonical_mask, |&(mask, _)| mask) {
        Ok(i) => CANONICAL_CELLS[i].1,
        Err(_) => ISOLATED_CELL,
    }
}

/// Hand-tuned raw-mask overrides for one tileset
///
/// Keyed by raw (pre-canonicalization) bitmask so a content author can
/// compensate for a specific hand-drawn sheet where the algorithmic answer
/// does not match the art that was actually drawn for that exact neighbor
/// pattern. Injected per pair config, not a module global.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideTable {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    entries: HashMap<u8, u8>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin a raw mask to a specific sheet cell
    pub fn set(&mut self, raw_mask: u8, cell: u8) {
        self.entries.insert(raw_mask, cell);
    }

    /// Remove the override for a raw mask
    pub fn clear(&mut self, raw_mask: u8) -> Option<u8> {
        self.entries.remove(&raw_mask)
    }

    /// Get the override for a raw mask, if any
    pub fn get(&self, raw_mask: u8) -> Option<u8> {
        self.entries.get(&raw_mask).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Resolve a raw neighbor bitmask to a sheet cell
///
/// Overrides are keyed by raw mask and checked before canonicalization is
/// even consulted, so they can redirect patterns the canonicalizer would
/// otherwise collapse.
pub fn resolve_cell(raw_mask: u8, overrides: &OverrideTable) -> u8 {
    if let Some(cell) = overrides.get(raw_mask) {
        return cell;
    }
    canonical_cell(canonicalize(raw_mask))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmask::neighbors::*;

    #[test]
    fn test_table_is_sorted_and_in_range() {
        for pair in CANONICAL_CELLS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
        for &(mask, cell) in &CANONICAL_CELLS {
            assert_eq!(canonicalize(mask), mask, "table mask {mask} not canonical");
            assert!(cell < 48);
        }
    }

    #[test]
    fn test_table_covers_every_canonical_mask() {
        let mut seen = std::collections::HashSet::new();
        for raw in 0..=255u8 {
            seen.insert(canonicalize(raw));
        }
        assert_eq!(seen.len(), CANONICAL_CELLS.len());
        for mask in seen {
            assert!(
                CANONICAL_CELLS.iter().any(|&(m, _)| m == mask),
                "canonical mask {mask} missing from table"
            );
        }
    }

    #[test]
    fn test_isolated_and_cross_cells() {
        assert_eq!(canonical_cell(0), ISOLATED_CELL);
        assert_eq!(canonical_cell(255), 46);
    }

    #[test]
    fn test_unknown_mask_falls_back_to_isolated() {
        // NE without N+E never appears in the canonical set.
        assert_eq!(canonical_cell(NE), ISOLATED_CELL);
        assert_eq!(canonical_cell(NE | SW), ISOLATED_CELL);
    }

    #[test]
    fn test_resolve_canonicalizes_raw_masks() {
        // Orphan NE collapses to isolated.
        assert_eq!(resolve_cell(NE, &OverrideTable::new()), ISOLATED_CELL);
        // N+NE without E collapses to the plain N edge.
        assert_eq!(
            resolve_cell(N | NE, &OverrideTable::new()),
            canonical_cell(N)
        );
    }

    #[test]
    fn test_override_precedence_over_canonicalization() {
        let mut overrides = OverrideTable::new();
        overrides.set(NE, 42);

        // The override wins even though canonicalization would route the
        // raw mask to the isolated cell.
        assert_eq!(resolve_cell(NE, &overrides), 42);
        // Other raw masks are untouched.
        assert_eq!(resolve_cell(N, &overrides), canonical_cell(N));
    }

    #[test]
    fn test_override_clear_restores_default() {
        let mut overrides = OverrideTable::new();
        overrides.set(255, 5);
        assert_eq!(resolve_cell(255, &overrides), 5);

        overrides.clear(255);
        assert_eq!(resolve_cell(255, &overrides), 46);
    }
}
