//! Bitmask autotile resolution engine
//!
//! This crate decides, for every rendered terrain tile, which cell of a
//! transition tile-sheet to draw based on which of its 8 neighbors differ
//! in type, so that terrain edges (grass/dirt, beach/sea, road/grass)
//! appear as continuous transitions instead of hard tile boundaries.
//!
//! The pipeline per (tile, pair config):
//! 1. Sample the 8 Moore neighbors into a raw bitmask ([`compute_bitmask`])
//! 2. Clear diagonal bits without supporting cardinals ([`canonicalize`])
//! 3. Resolve the mask to a sheet cell, raw-mask overrides taking priority
//!    ([`resolve_cell`])
//! 4. Map the cell to a pixel rectangle for the renderer to blit
//!
//! # Example
//!
//! ```rust
//! use terra_core::{Tile, TileMap, TileType, TilesetImage};
//! use terra_autotile::{transitions_at, AutotilePairConfig, AutotileRegistry};
//!
//! let mut map = TileMap::new();
//! map.insert(0, 0, Tile::new(TileType::Grass));
//! map.insert(0, -1, Tile::new(TileType::Dirt));
//!
//! let mut registry = AutotileRegistry::new();
//! registry.add_pair(AutotilePairConfig::new(
//!     TileType::Grass,
//!     TileType::Dirt,
//!     TilesetImage::new("grass-dirt".into(), "grass_dirt.png".into(), 192, 256),
//! ));
//!
//! // One transition: Dirt to the north of the grass tile.
//! let transitions = transitions_at(&map, 0, 0, &registry);
//! assert_eq!(transitions.len(), 1);
//! ```
//!
//! Everything here is a pure function of the tile map and registry passed
//! in; no state is retained between calls and every boundary condition
//! degrades to a safe default rather than an error.

pub mod bitmask;
pub mod config;
pub mod lookup;
pub mod transitions;

// Re-export main types at crate root
pub use bitmask::{canonicalize, compute_bitmask, neighbors, NEIGHBOR_OFFSETS};
pub use config::{AutotilePairConfig, AutotileRegistry};
pub use lookup::{canonical_cell, resolve_cell, OverrideTable, ISOLATED_CELL};
pub use transitions::{transitions_at, TileTransition};

// Re-export terra_core
pub use terra_core;
