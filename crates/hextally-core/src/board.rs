//! Board representation: terrain kinds, trade ports, tiles, and the board.
//!
//! This module contains:
//! - Terrain types for land, desert, and sea tiles
//! - Trade port kinds and their exchange rates
//! - The `Tile` struct and the immutable `Board` collection
//!
//! Boards are produced by the generator (see [`crate::generate`]) and are
//! never mutated afterwards; callers only query or serialize them.

use crate::hex::HexCoord;
use serde::{Deserialize, Serialize};

/// Terrain of a hex tile.
///
/// The five production terrains each yield one resource; desert and sea
/// yield nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    /// Produces lumber
    Forest,
    /// Produces wool
    Pasture,
    /// Produces wheat
    Grain,
    /// Produces brick
    Hills,
    /// Produces ore
    Mountains,
    /// No production, no number token
    Desert,
    /// Surrounds the playable area; may carry a trade port
    Sea,
}

impl Terrain {
    /// The five production terrains
    pub const PRODUCING: [Terrain; 5] = [
        Terrain::Forest,
        Terrain::Pasture,
        Terrain::Grain,
        Terrain::Hills,
        Terrain::Mountains,
    ];

    /// Whether a tile of this terrain carries a number token
    pub fn produces(&self) -> bool {
        !matches!(self, Terrain::Desert | Terrain::Sea)
    }

    /// Whether this terrain is part of the inner land disk
    pub fn is_land(&self) -> bool {
        !matches!(self, Terrain::Sea)
    }
}

/// Trade port kinds for coastal sea tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortKind {
    /// 3:1, trades any resource
    Generic,
    /// 2:1 lumber
    Forest,
    /// 2:1 wool
    Pasture,
    /// 2:1 wheat
    Grain,
    /// 2:1 brick
    Hills,
    /// 2:1 ore
    Mountains,
}

impl PortKind {
    /// The exchange rate for this port
    pub fn rate(&self) -> u32 {
        match self {
            PortKind::Generic => 3,
            _ => 2,
        }
    }
}

/// A trade port attached to a sea tile on the outer ring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Port {
    /// What the port trades
    pub kind: PortKind,
    /// Facing angle in degrees, pointing the rendered icon at the board center
    pub rotation: f64,
}

/// A single hex tile on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Position on the hex grid
    pub coord: HexCoord,
    /// Terrain of the tile
    pub terrain: Terrain,
    /// Production number (2-12, never 7); present only on producing land tiles
    pub number: Option<u8>,
    /// Trade port; only ever present on sea tiles
    pub port: Option<Port>,
}

impl Tile {
    /// Create a land tile; producing terrains get a number token
    pub fn land(coord: HexCoord, terrain: Terrain, number: Option<u8>) -> Self {
        Self {
            coord,
            terrain,
            number,
            port: None,
        }
    }

    /// Create a sea tile with no port
    pub fn sea(coord: HexCoord) -> Self {
        Self {
            coord,
            terrain: Terrain::Sea,
            number: None,
            port: None,
        }
    }

    /// Whether this tile produces on a dice roll
    pub fn produces(&self) -> bool {
        self.terrain.produces()
    }
}

/// The complete generated board.
///
/// Tiles are stored in placement order: the land disk in row-major order,
/// followed by the sea ring sorted by angle around the center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    pub(crate) fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// All tiles in placement order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// All land tiles (the inner disk, desert included)
    pub fn land_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.terrain.is_land())
    }

    /// All sea tiles (the outer ring)
    pub fn sea_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.terrain == Terrain::Sea)
    }

    /// All ports on the board
    pub fn ports(&self) -> impl Iterator<Item = &Port> {
        self.tiles.iter().filter_map(|t| t.port.as_ref())
    }

    /// Look up a tile by coordinate
    pub fn get(&self, coord: &HexCoord) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.coord == *coord)
    }

    /// Total tile count (land + sea)
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the board holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
