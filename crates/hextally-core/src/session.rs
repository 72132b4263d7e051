//! Recorded game sessions.
//!
//! A session is one finished in-person game: who played, who won, and the
//! optional score breakdown the group filled in afterwards. Sessions are
//! the input to the leaderboard and achievement computations; how they are
//! stored is the caller's concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Victory point breakdown for the winner of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScoreBreakdown {
    /// Settlements on the board at game end (1 VP each)
    pub settlements: u32,
    /// Cities on the board at game end (2 VP each)
    pub cities: u32,
    /// Victory point development cards revealed
    pub victory_cards: u32,
    /// Held the longest road bonus (2 VP)
    pub longest_road: bool,
    /// Held the largest army bonus (2 VP)
    pub largest_army: bool,
    /// Total as entered by the group
    pub total: u32,
}

impl ScoreBreakdown {
    /// Recompute the total from the parts
    pub fn tally(&self) -> u32 {
        let mut total = self.settlements + 2 * self.cities + self.victory_cards;
        if self.longest_road {
            total += 2;
        }
        if self.largest_army {
            total += 2;
        }
        total
    }
}

/// One recorded game night session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    /// Unique session id
    pub id: String,
    /// Player group this session belongs to, if any
    pub group_id: Option<String>,
    /// Display name for the session
    pub name: String,
    /// When the game was played
    pub played_at: DateTime<Utc>,
    /// Everyone at the table
    pub players: Vec<String>,
    /// Name of the winner
    pub winner: String,
    /// Free-form notes
    pub notes: Option<String>,
    /// Winner's score breakdown, if recorded
    pub score_breakdown: Option<ScoreBreakdown>,
    /// Dice numbers that came up most often, if tracked
    pub dice_stats: Option<Vec<u8>>,
}

impl GameSession {
    /// Number of players at the table
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Whether the named player took part in this session
    pub fn includes(&self, player: &str) -> bool {
        self.players.iter().any(|p| p == player)
    }

    /// Whether the named player won this session
    pub fn won_by(&self, player: &str) -> bool {
        self.winner == player
    }
}
