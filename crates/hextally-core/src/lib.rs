//! Hextally - a companion toolkit for in-person hex board game nights
//!
//! This crate provides the core logic for Hextally, including:
//! - Hex coordinate system for the game board
//! - Procedural board generation with resources, number tokens, and ports
//! - Recorded game sessions with score breakdowns
//! - Leaderboard statistics and achievement checks
//!
//! # Architecture
//!
//! The library is pure and platform-agnostic. It can be compiled to:
//! - Native Rust, served to clients by `hextally-server`
//! - WebAssembly for fully client-side use in the web UI
//!
//! Persistence is deliberately out of scope: boards are generated fresh per
//! request, and the statistics are pure functions over whatever session
//! history the caller supplies.
//!
//! # Modules
//!
//! - [`hex`]: Axial coordinates and region enumeration
//! - [`board`]: Tiles, terrains, ports, and the board collection
//! - [`generate`]: The board generator
//! - [`session`]: Recorded game sessions
//! - [`stats`]: Leaderboard aggregation
//! - [`achievements`]: Achievement catalog and threshold checks

pub mod achievements;
pub mod board;
pub mod generate;
pub mod hex;
pub mod session;
pub mod stats;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use achievements::{earned, Achievement, CATALOG};
pub use board::{Board, Port, PortKind, Terrain, Tile};
pub use generate::{BoardError, BoardSize};
pub use hex::HexCoord;
pub use session::{GameSession, ScoreBreakdown};
pub use stats::{leaderboard, max_win_streak, PlayerStats};
