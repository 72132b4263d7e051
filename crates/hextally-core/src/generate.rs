//! Procedural board generation.
//!
//! A board is generated fresh on each request: fixed terrain/number/port
//! pools are shuffled independently and consumed front-to-back while the
//! land disk and sea ring are enumerated in a deterministic order. The
//! result is random per call but always satisfies the layout invariants
//! (tile counts, pool distributions, ring geometry, port spacing).

use crate::board::{Board, Port, PortKind, Terrain, Tile};
use crate::hex::{self, HexCoord};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// How many times to re-shuffle the number pool looking for a layout
/// without adjacent 6s and 8s before giving up and keeping the last one
const NUMBER_SHUFFLE_ATTEMPTS: usize = 100;

/// The classic 18-token number set for the standard board
const STANDARD_NUMBERS: [u8; 18] = [5, 2, 6, 3, 8, 10, 9, 12, 11, 4, 8, 10, 9, 4, 5, 6, 3, 11];

/// Errors from the generation entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The size selector was not one of the supported values
    #[error("unsupported board size {0}, expected 3 (standard) or 5 (large)")]
    InvalidSize(u8),
}

/// Supported board sizes.
///
/// `Small` is the standard 19-hex layout whose terrain and number pools are
/// the classic distribution. `Large` fills radius 3 (37 hexes); its pools
/// are tunables without a canonical source, kept here as constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardSize {
    Small,
    Large,
}

impl BoardSize {
    /// Cube-distance bound of the inner land disk
    pub fn land_radius(&self) -> i32 {
        match self {
            BoardSize::Small => 2,
            BoardSize::Large => 3,
        }
    }

    /// Radius of the single sea ring surrounding the land
    pub fn water_radius(&self) -> i32 {
        self.land_radius() + 1
    }

    /// Number of tiles in the land disk
    pub fn land_tile_count(&self) -> usize {
        let r = self.land_radius();
        (3 * r * r + 3 * r + 1) as usize
    }

    /// Number of desert tiles in the terrain pool
    pub fn desert_count(&self) -> usize {
        match self {
            BoardSize::Small => 1,
            BoardSize::Large => 2,
        }
    }

    /// Number of ports placed on the sea ring
    pub fn port_count(&self) -> usize {
        self.port_pool().len()
    }

    /// Terrain multiset sized to exactly fill the land disk
    fn terrain_pool(&self) -> Vec<Terrain> {
        let counts: &[(Terrain, usize)] = match self {
            BoardSize::Small => &[
                (Terrain::Forest, 4),
                (Terrain::Pasture, 4),
                (Terrain::Grain, 4),
                (Terrain::Hills, 3),
                (Terrain::Mountains, 3),
                (Terrain::Desert, 1),
            ],
            BoardSize::Large => &[
                (Terrain::Desert, 2),
                (Terrain::Forest, 7),
                (Terrain::Pasture, 7),
                (Terrain::Grain, 7),
                (Terrain::Hills, 7),
                (Terrain::Mountains, 7),
            ],
        };
        counts
            .iter()
            .flat_map(|(terrain, n)| std::iter::repeat(*terrain).take(*n))
            .collect()
    }

    /// Number multiset sized to exactly fill the non-desert land tiles
    fn number_pool(&self) -> Vec<u8> {
        match self {
            BoardSize::Small => STANDARD_NUMBERS.to_vec(),
            BoardSize::Large => {
                // Doubled standard set, truncated to the 35 producing tiles
                let mut pool: Vec<u8> = STANDARD_NUMBERS
                    .iter()
                    .chain(STANDARD_NUMBERS.iter())
                    .copied()
                    .collect();
                pool.truncate(self.land_tile_count() - self.desert_count());
                pool
            }
        }
    }

    /// Port multiset: 4 generic plus one per resource, with three extras
    /// for the large board
    fn port_pool(&self) -> Vec<PortKind> {
        let mut pool = vec![
            PortKind::Generic,
            PortKind::Generic,
            PortKind::Generic,
            PortKind::Generic,
            PortKind::Grain,
            PortKind::Forest,
            PortKind::Hills,
            PortKind::Mountains,
            PortKind::Pasture,
        ];
        if *self == BoardSize::Large {
            pool.extend([PortKind::Generic, PortKind::Pasture, PortKind::Generic]);
        }
        pool
    }
}

impl TryFrom<u8> for BoardSize {
    type Error = BoardError;

    /// Map the UI size selector (hex span) to a board size
    fn try_from(value: u8) -> Result<Self, BoardError> {
        match value {
            3 => Ok(BoardSize::Small),
            5 => Ok(BoardSize::Large),
            other => Err(BoardError::InvalidSize(other)),
        }
    }
}

impl Board {
    /// Generate a fresh randomized board of the given size
    pub fn generate(size: BoardSize) -> Self {
        let mut rng = rand::thread_rng();
        Self::generate_with_rng(size, &mut rng)
    }

    /// Generate a board with a provided RNG.
    /// This allows for deterministic board generation when needed.
    pub fn generate_with_rng<R: Rng>(size: BoardSize, rng: &mut R) -> Self {
        let land_coords = hex::disk(size.land_radius());

        let mut terrains = size.terrain_pool();
        terrains.shuffle(rng);

        let numbers = shuffle_numbers_spreading_hotspots(&land_coords, &terrains, size, rng);
        let mut numbers = numbers.into_iter();

        let mut tiles = Vec::with_capacity(land_coords.len() + 6 * size.water_radius() as usize);

        // Land disk in row-major order, consuming the pools front-to-back;
        // desert tiles skip the number queue
        for (coord, terrain) in land_coords.iter().zip(&terrains) {
            let number = if terrain.produces() { numbers.next() } else { None };
            tiles.push(Tile::land(*coord, *terrain, number));
        }

        // Sea ring, sorted by angle around the center so ports end up
        // evenly spaced along the circumference
        let mut ring = hex::ring(size.water_radius());
        ring.sort_by(|a, b| a.angle_around_origin().total_cmp(&b.angle_around_origin()));

        let mut ports = size.port_pool();
        ports.shuffle(rng);
        let mut ports = ports.into_iter();

        for (i, coord) in ring.iter().enumerate() {
            let mut tile = Tile::sea(*coord);
            if i % 2 == 0 {
                if let Some(kind) = ports.next() {
                    tile.port = Some(Port {
                        kind,
                        rotation: inward_rotation(coord),
                    });
                }
            }
            tiles.push(tile);
        }

        Board::from_tiles(tiles)
    }
}

/// Shuffle the number pool, re-rolling until no 6 or 8 would land next to
/// another 6 or 8 under the row-major assignment.
///
/// Falls back to the last shuffle after `NUMBER_SHUFFLE_ATTEMPTS`, which
/// keeps generation total even for adversarial pools.
fn shuffle_numbers_spreading_hotspots<R: Rng>(
    land_coords: &[HexCoord],
    terrains: &[Terrain],
    size: BoardSize,
    rng: &mut R,
) -> Vec<u8> {
    let pool = size.number_pool();

    for _ in 0..NUMBER_SHUFFLE_ATTEMPTS {
        let mut shuffled = pool.clone();
        shuffled.shuffle(rng);
        if hotspots_are_spread(land_coords, terrains, &shuffled) {
            return shuffled;
        }
    }

    let mut shuffled = pool;
    shuffled.shuffle(rng);
    shuffled
}

/// Check that no 6 or 8 neighbors another 6 or 8 when `numbers` is assigned
/// to producing tiles in placement order
fn hotspots_are_spread(land_coords: &[HexCoord], terrains: &[Terrain], numbers: &[u8]) -> bool {
    let mut by_coord: HashMap<HexCoord, u8> = HashMap::new();
    let mut next = numbers.iter().copied();

    for (coord, terrain) in land_coords.iter().zip(terrains) {
        if terrain.produces() {
            if let Some(number) = next.next() {
                by_coord.insert(*coord, number);
            }
        }
    }

    for (coord, &number) in &by_coord {
        if number == 6 || number == 8 {
            for neighbor in coord.neighbors() {
                if let Some(&n) = by_coord.get(&neighbor) {
                    if n == 6 || n == 8 {
                        return false;
                    }
                }
            }
        }
    }

    true
}

/// Facing angle for a port on `coord`: the direction from the tile's
/// projected center back toward the origin, in degrees, plus the 90 degree
/// offset the icon is drawn with
fn inward_rotation(coord: &HexCoord) -> f64 {
    let (x, y) = coord.to_pixel();
    (-y).atan2(-x).to_degrees() + 90.0
}
