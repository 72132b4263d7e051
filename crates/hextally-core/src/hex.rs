//! Hex coordinate system using axial coordinates (q, r).
//!
//! This module provides the foundational coordinate type for the hex board:
//! `HexCoord` identifies individual tiles, and the free functions [`disk`]
//! and [`ring`] enumerate the regions the generator places tiles on.
//!
//! We use axial coordinates because they make neighbor and distance
//! calculations elegant and avoid the wasted space of offset coordinates.

use serde::{Deserialize, Serialize};

/// Axial coordinate for hex grid.
///
/// In axial coordinates:
/// - `q` increases going east (right)
/// - `r` increases going southeast
/// - The third coordinate `s` (not stored) satisfies: q + r + s = 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct HexCoord {
    /// Column (increases going east)
    pub q: i32,
    /// Row (increases going southeast)
    pub r: i32,
}

impl HexCoord {
    /// Create a new hex coordinate
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit third coordinate (s = -q - r)
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// The six neighboring hexes in clockwise order starting from East
    pub fn neighbors(&self) -> [HexCoord; 6] {
        [
            HexCoord::new(self.q + 1, self.r),     // East
            HexCoord::new(self.q + 1, self.r - 1), // NorthEast
            HexCoord::new(self.q, self.r - 1),     // NorthWest
            HexCoord::new(self.q - 1, self.r),     // West
            HexCoord::new(self.q - 1, self.r + 1), // SouthWest
            HexCoord::new(self.q, self.r + 1),     // SouthEast
        ]
    }

    /// Distance to another hex (in hex steps)
    pub fn distance_to(&self, other: &HexCoord) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        ((dq + dr + ds) / 2) as u32
    }

    /// Cube distance from the board center at (0, 0)
    pub fn distance_from_origin(&self) -> u32 {
        self.distance_to(&HexCoord::new(0, 0))
    }

    /// Convert to unit pixel coordinates (center of hex).
    ///
    /// Flat-top orientation: x = 1.5 * q, y = sqrt(3)/2 * q + sqrt(3) * r.
    /// Ring ordering and port rotation are both derived from this projection,
    /// so it has to stay in sync with the renderer.
    pub fn to_pixel(&self) -> (f64, f64) {
        let sqrt3 = 3.0_f64.sqrt();
        let x = 1.5 * self.q as f64;
        let y = sqrt3 / 2.0 * self.q as f64 + sqrt3 * self.r as f64;
        (x, y)
    }

    /// Angle of this hex's center around the origin, in radians
    pub fn angle_around_origin(&self) -> f64 {
        let (x, y) = self.to_pixel();
        y.atan2(x)
    }
}

/// All coordinates with cube-distance <= `radius` from the origin,
/// in row-major order (by q, then r).
pub fn disk(radius: i32) -> Vec<HexCoord> {
    let mut coords = Vec::new();
    for q in -radius..=radius {
        let r_min = (-radius).max(-q - radius);
        let r_max = radius.min(-q + radius);
        for r in r_min..=r_max {
            coords.push(HexCoord::new(q, r));
        }
    }
    coords
}

/// All coordinates at cube-distance exactly `radius` from the origin,
/// in row-major order (by q, then r).
pub fn ring(radius: i32) -> Vec<HexCoord> {
    disk(radius)
        .into_iter()
        .filter(|c| c.distance_from_origin() == radius as u32)
        .collect()
}
