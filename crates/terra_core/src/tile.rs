//! Tile types and the sparse world tile map

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Terrain kind of a single world tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    /// Temperate meadows (south/middle of the island)
    Grass,
    Dirt,
    DirtRoad,
    Sea,
    Beach,
    Sand,
    /// Distinct type for hot spring water pools
    HotSpringWater,
    /// Rocky gray-brown texture for mining areas
    Quarry,
    /// Paved compound areas
    Asphalt,
    /// Dense forested areas, higher tree density
    Forest,
    /// Arctic tundra (northern regions - mossy, low vegetation)
    Tundra,
    /// High-altitude rocky terrain (far north - sparse, rocky)
    Alpine,
    /// Grassy patches within the tundra biome
    TundraGrass,
}

impl TileType {
    /// Returns true if this tile type is any form of water (Sea or HotSpringWater)
    pub fn is_water(&self) -> bool {
        matches!(self, TileType::Sea | TileType::HotSpringWater)
    }

    /// Returns true if this tile type is specifically ocean/sea water (not hot springs)
    pub fn is_sea_water(&self) -> bool {
        matches!(self, TileType::Sea)
    }

    /// Returns true if this tile type is hot spring water
    pub fn is_hot_spring_water(&self) -> bool {
        matches!(self, TileType::HotSpringWater)
    }

    /// Returns true if this tile type is a travel surface (roads and paving)
    pub fn is_road(&self) -> bool {
        matches!(self, TileType::DirtRoad | TileType::Asphalt)
    }
}

/// A single cell in the sparse world grid
///
/// Tiles are owned by the world-state collaborator; the autotile engine
/// only ever reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub tile_type: TileType,
}

impl Tile {
    pub fn new(tile_type: TileType) -> Self {
        Self { tile_type }
    }
}

/// Sparse mapping from `(x, y)` coordinates to tiles
///
/// Absence of a key means "no tile here", which is distinct from a tile
/// of a non-matching type: missing neighbors contribute nothing to a
/// neighbor bitmask, so edge-of-loaded-area tiles degrade toward isolated
/// tile art instead of showing a spurious border.
#[derive(Debug, Clone, Default)]
pub struct TileMap {
    tiles: HashMap<(i32, i32), Tile>,
}

impl TileMap {
    pub fn new() -> Self {
        Self {
            tiles: HashMap::new(),
        }
    }

    /// Insert or replace the tile at a position
    pub fn insert(&mut self, x: i32, y: i32, tile: Tile) -> Option<Tile> {
        self.tiles.insert((x, y), tile)
    }

    /// Remove the tile at a position
    pub fn remove(&mut self, x: i32, y: i32) -> Option<Tile> {
        self.tiles.remove(&(x, y))
    }

    /// Get the tile at a position
    pub fn get(&self, x: i32, y: i32) -> Option<&Tile> {
        self.tiles.get(&(x, y))
    }

    /// Get the terrain type at a position, if a tile exists there
    pub fn tile_type_at(&self, x: i32, y: i32) -> Option<TileType> {
        self.tiles.get(&(x, y)).map(|t| t.tile_type)
    }

    /// Number of tiles in the map
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the map contains no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over all tiles with their positions
    pub fn iter(&self) -> impl Iterator<Item = (&(i32, i32), &Tile)> {
        self.tiles.iter()
    }
}
