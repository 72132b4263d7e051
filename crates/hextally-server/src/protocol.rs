//! WebSocket protocol messages for the Hextally service.

use hextally_core::{BoardSize, GameSession, PlayerStats, Tile};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Messages sent from client to server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ClientMessage {
    /// Generate a fresh board; `size` is the UI selector (3 or 5)
    GenerateBoard { size: u8 },

    /// Compute the leaderboard over the supplied session history
    Leaderboard { sessions: Vec<GameSession> },

    /// Compute which achievements a player has earned
    PlayerAchievements {
        player: String,
        sessions: Vec<GameSession>,
    },

    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ServerMessage {
    /// Welcome message with assigned client ID
    Welcome { client_id: Uuid },

    /// A freshly generated board, tiles in placement order
    Board { size: BoardSize, tiles: Vec<Tile> },

    /// Leaderboard standings, best first
    Leaderboard { standings: Vec<PlayerStats> },

    /// Achievement ids the player has earned, in catalog order
    PlayerAchievements { player: String, earned: Vec<String> },

    /// Error occurred
    Error { message: String },

    /// Pong response
    Pong,
}
