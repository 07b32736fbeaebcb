//! Pair configuration and registry
//!
//! Each registered pair describes one ordered transition: the primary type
//! hosts the transition art, the secondary type triggers it. A single
//! primary type may carry several pairs (Grass->Dirt, Grass->Beach,
//! Grass->DirtRoad) and each is evaluated independently per tile.

use crate::lookup::OverrideTable;
use serde::{Deserialize, Serialize};
use terra_core::{TilesetImage, TileType};
use uuid::Uuid;

/// One ordered transition: primary tile type into secondary neighbor type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutotilePairConfig {
    pub id: Uuid,
    /// The tile type that hosts the transition art
    pub primary: TileType,
    /// The neighbor type that triggers the transition
    pub secondary: TileType,
    /// The transition tile-sheet for this pair
    pub image: TilesetImage,
    /// Advisory cell size from legacy tooling; actual cell geometry is
    /// always derived from the sheet's pixel dimensions
    #[serde(default)]
    pub tile_size: u32,
    /// Keeps the pair registered but excluded from transition enumeration,
    /// for one-directional pairs (field->path registered, path->field
    /// suppressed so interior path tiles stay visually pure)
    #[serde(default)]
    pub suppressed: bool,
    /// Hand-tuned raw-mask overrides for this pair's sheet
    #[serde(default, skip_serializing_if = "OverrideTable::is_empty")]
    pub overrides: OverrideTable,
}

impl AutotilePairConfig {
    pub fn new(primary: TileType, secondary: TileType, image: TilesetImage) -> Self {
        Self {
            id: Uuid::new_v4(),
            primary,
            secondary,
            image,
            tile_size: 0,
            suppressed: false,
            overrides: OverrideTable::new(),
        }
    }

    /// Suppress this pair (builder style)
    pub fn with_suppressed(mut self, suppressed: bool) -> Self {
        self.suppressed = suppressed;
        self
    }

    /// Attach an override table (builder style)
    pub fn with_overrides(mut self, overrides: OverrideTable) -> Self {
        self.overrides = overrides;
        self
    }
}

/// All transition pairs registered for a project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutotileRegistry {
    pub pairs: Vec<AutotilePairConfig>,
}

impl AutotileRegistry {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Register a transition pair
    pub fn add_pair(&mut self, pair: AutotilePairConfig) {
        self.pairs.push(pair);
    }

    /// Get a pair by ID
    pub fn get_pair(&self, id: Uuid) -> Option<&AutotilePairConfig> {
        self.pairs.iter().find(|p| p.id == id)
    }

    /// Get a mutable pair by ID
    pub fn get_pair_mut(&mut self, id: Uuid) -> Option<&mut AutotilePairConfig> {
        self.pairs.iter_mut().find(|p| p.id == id)
    }

    /// Remove a pair by ID
    pub fn remove_pair(&mut self, id: Uuid) -> Option<AutotilePairConfig> {
        if let Some(pos) = self.pairs.iter().position(|p| p.id == id) {
            Some(self.pairs.remove(pos))
        } else {
            None
        }
    }

    /// Iterate over all pairs hosted by a primary type, in registration order
    pub fn pairs_for(&self, primary: TileType) -> impl Iterator<Item = &AutotilePairConfig> {
        self.pairs.iter().filter(move |p| p.primary == primary)
    }

    /// Load a registry from a JSON data asset
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize the registry to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
